use yew::prelude::*;

use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::ui::basket_panel::BasketPanel;
use crate::components::ui::checkout_dialog::CheckoutDialog;
use crate::components::ui::confirmation::ConfirmationView;
use crate::components::ui::product_grid::ProductGrid;

pub fn render_app(state: &AppState, handlers: &AppHandlers) -> Html {
    if let Some(confirmation) = (*state.confirmation).clone() {
        return html! {
            <ConfirmationView
                {confirmation}
                on_continue={handlers.dismiss_confirmation.clone()}
            />
        };
    }

    let in_basket: Vec<String> = state
        .lines
        .iter()
        .map(|line| line.product_id.clone())
        .collect();
    let total_items: u32 = state.lines.iter().map(|line| line.quantity).sum();

    html! {
        <main class="storefront">
            <header class="storefront__header">
                <h1>{ "Tradepost" }</h1>
                <span class="storefront__badge" data-testid="basket-count">
                    { format!("{total_items} in basket") }
                </span>
            </header>
            <ProductGrid
                products={(*state.products).clone()}
                {in_basket}
                on_toggle={handlers.toggle.clone()}
            />
            <BasketPanel
                lines={(*state.lines).clone()}
                on_set_quantity={handlers.set_quantity.clone()}
                on_remove={handlers.remove.clone()}
                on_clear={handlers.clear.clone()}
                on_checkout={handlers.open_checkout.clone()}
            />
            <CheckoutDialog
                open={*state.checkout_open}
                draft={(*state.draft).clone()}
                subtotal_cents={state.subtotal_cents()}
                submitting={*state.submitting}
                validation={(*state.validation).clone()}
                submit_error={(*state.submit_error).clone()}
                on_close={handlers.close_checkout.clone()}
                on_select_plan={handlers.select_plan.clone()}
                on_update_field={handlers.update_field.clone()}
                on_submit={handlers.submit.clone()}
            />
        </main>
    }
}

//! Post-submit confirmation view shown after the backend accepts an order.

use tradepost_shop::OrderConfirmation;
use yew::prelude::*;

use crate::components::button::Button;

#[derive(Properties, PartialEq, Clone)]
pub struct ConfirmationProps {
    pub confirmation: OrderConfirmation,
    pub on_continue: Callback<()>,
}

#[function_component(ConfirmationView)]
pub fn confirmation_view(props: &ConfirmationProps) -> Html {
    let onclick = {
        let cb = props.on_continue.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section class="confirmation" data-testid="order-confirmation">
            <h2>{ "Order confirmed" }</h2>
            { (!props.confirmation.order_id.is_empty()).then(|| html! {
                <p class="confirmation__id">
                    { format!("Order reference: {}", props.confirmation.order_id) }
                </p>
            }) }
            { (!props.confirmation.message.is_empty()).then(|| html! {
                <p class="confirmation__message">{ props.confirmation.message.clone() }</p>
            }) }
            <Button label="Continue shopping" {onclick} />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn confirmation_shows_the_order_reference() {
        let props = ConfirmationProps {
            confirmation: OrderConfirmation {
                order_id: "ord_84731".to_string(),
                message: "Thank you for your order".to_string(),
            },
            on_continue: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ConfirmationView>::with_props(props).render());
        assert!(html.contains("Order confirmed"));
        assert!(html.contains("ord_84731"));
        assert!(html.contains("Thank you for your order"));
    }

    #[test]
    fn empty_fields_are_simply_omitted() {
        let props = ConfirmationProps {
            confirmation: OrderConfirmation::default(),
            on_continue: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ConfirmationView>::with_props(props).render());
        assert!(html.contains("Order confirmed"));
        assert!(!html.contains("Order reference"));
    }
}

//! Basket side panel: lines with quantity edits, removal, and the checkout
//! entry point.

use tradepost_shop::{BasketLine, format_cents};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::button::Button;

#[derive(Properties, PartialEq, Clone)]
pub struct BasketPanelProps {
    pub lines: Vec<BasketLine>,
    /// `(product_id, raw input)`; the store floors invalid input to 1.
    pub on_set_quantity: Callback<(String, String)>,
    pub on_remove: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_checkout: Callback<()>,
}

#[function_component(BasketPanel)]
pub fn basket_panel(props: &BasketPanelProps) -> Html {
    let subtotal_cents: i64 = props.lines.iter().map(BasketLine::line_total_cents).sum();
    let empty = props.lines.is_empty();

    let on_clear = {
        let cb = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_checkout = {
        let cb = props.on_checkout.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <aside class="basket" data-testid="basket-panel">
            <h2>{ "Your basket" }</h2>
            { if empty {
                html! { <p class="basket__empty">{ "Your basket is empty" }</p> }
            } else {
                html! {
                    <ul class="basket__lines">
                        { for props.lines.iter().map(|line| render_line(
                            line,
                            &props.on_set_quantity,
                            &props.on_remove,
                        )) }
                    </ul>
                }
            } }
            <div class="basket__footer">
                <span class="basket__subtotal" data-testid="basket-subtotal">
                    { format!("Subtotal: {}", format_cents(subtotal_cents)) }
                </span>
                <Button label="Clear basket" disabled={empty} onclick={on_clear} />
                <Button
                    label="Checkout"
                    class={classes!("basket__checkout")}
                    disabled={empty}
                    onclick={on_checkout}
                />
            </div>
        </aside>
    }
}

fn render_line(
    line: &BasketLine,
    on_set_quantity: &Callback<(String, String)>,
    on_remove: &Callback<String>,
) -> Html {
    let oninput = {
        let cb = on_set_quantity.clone();
        let product_id = line.product_id.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit((product_id.clone(), input.value()));
            }
        })
    };
    let onclick = {
        let cb = on_remove.clone();
        let product_id = line.product_id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(product_id.clone()))
    };
    html! {
        <li class="basket__line" key={line.product_id.clone()}>
            <span class="basket__name">{ line.name.clone() }</span>
            <span class="basket__unit-price">{ format_cents(line.unit_price_cents) }</span>
            <input
                class="basket__quantity"
                type="number"
                min="1"
                value={line.quantity.to_string()}
                aria-label={format!("Quantity of {}", line.name)}
                {oninput}
            />
            <span class="basket__line-total">{ format_cents(line.line_total_cents()) }</span>
            <Button label="Remove" {onclick} />
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn line(id: &str, name: &str, price_cents: i64, quantity: u32) -> BasketLine {
        BasketLine {
            product_id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            image_url: String::new(),
            unit_price_cents: price_cents,
            quantity,
        }
    }

    fn props_with(lines: Vec<BasketLine>) -> BasketPanelProps {
        BasketPanelProps {
            lines,
            on_set_quantity: Callback::noop(),
            on_remove: Callback::noop(),
            on_clear: Callback::noop(),
            on_checkout: Callback::noop(),
        }
    }

    #[test]
    fn empty_basket_disables_checkout() {
        let html = block_on(
            LocalServerRenderer::<BasketPanel>::with_props(props_with(Vec::new())).render(),
        );
        assert!(html.contains("Your basket is empty"));
        assert!(html.contains("Subtotal: $0.00"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn subtotal_reflects_price_times_quantity() {
        let lines = vec![
            line("p1", "Desk lamp", 1000, 2),
            line("p2", "Notebook", 550, 3),
        ];
        let html =
            block_on(LocalServerRenderer::<BasketPanel>::with_props(props_with(lines)).render());
        assert!(html.contains("Subtotal: $36.50"));
        assert!(html.contains("Desk lamp"));
        assert!(html.contains("Notebook"));
    }
}

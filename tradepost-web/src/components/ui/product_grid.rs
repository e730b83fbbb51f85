//! Catalog grid: product snapshots with add/remove toggle buttons.

use tradepost_shop::{ProductSnapshot, format_cents};
use yew::prelude::*;

use crate::components::button::Button;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductGridProps {
    pub products: Vec<ProductSnapshot>,
    /// Ids currently in the basket, to flip the toggle label.
    pub in_basket: Vec<String>,
    pub on_toggle: Callback<ProductSnapshot>,
}

#[function_component(ProductGrid)]
pub fn product_grid(props: &ProductGridProps) -> Html {
    html! {
        <section class="catalog" data-testid="catalog">
            { for props.products.iter().map(|product| {
                let selected = props.in_basket.iter().any(|id| *id == product.id);
                render_card(product, selected, &props.on_toggle)
            }) }
        </section>
    }
}

fn render_card(
    product: &ProductSnapshot,
    selected: bool,
    on_toggle: &Callback<ProductSnapshot>,
) -> Html {
    let onclick = {
        let on_toggle = on_toggle.clone();
        let product = product.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(product.clone()))
    };
    let toggle_label = if selected {
        "Remove from basket"
    } else {
        "Add to basket"
    };
    html! {
        <article class={classes!("catalog__card", selected.then_some("catalog__card--selected"))}>
            { (!product.image_url.is_empty()).then(|| html! {
                <img src={product.image_url.clone()} alt={product.name.clone()} />
            }) }
            <h3>{ product.name.clone() }</h3>
            <p class="catalog__description">{ product.description.clone() }</p>
            <p class="catalog__price">{ format_cents(product.price_cents) }</p>
            { (product.stock_level <= 0).then(|| html! {
                <p class="catalog__stock">{ "Out of stock" }</p>
            }) }
            <Button label={toggle_label} {onclick} />
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn grid_flips_toggle_label_for_basket_members() {
        let props = ProductGridProps {
            products: vec![
                ProductSnapshot::new("p1", "Desk lamp", 1999),
                ProductSnapshot::new("p2", "Notebook", 550),
            ],
            in_basket: vec!["p2".to_string()],
            on_toggle: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<ProductGrid>::with_props(props).render());
        assert!(html.contains("Add to basket"));
        assert!(html.contains("Remove from basket"));
        assert!(html.contains("$19.99"));
        assert!(html.contains("$5.50"));
    }
}

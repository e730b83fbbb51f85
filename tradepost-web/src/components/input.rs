use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub label: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub input_type: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    /// Marks the field when validation flagged it.
    #[prop_or_default]
    pub invalid: bool,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

/// Labeled text input emitting the raw string value on every keystroke.
/// Formatting happens in the draft, not here; the formatted form flows back
/// in through `value`.
#[function_component(TextField)]
pub fn text_field(props: &Props) -> Html {
    let oninput = {
        let cb = props.oninput.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit(input.value());
            }
        })
    };
    let input_type = props.input_type.clone().unwrap_or_else(|| "text".into());
    let class = classes!("field", props.invalid.then_some("field--invalid"));
    html! {
        <label {class}>
            <span class="field__label">{ props.label.clone() }</span>
            <input
                type={input_type}
                name={props.name.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                disabled={props.disabled}
                aria-invalid={if props.invalid { "true" } else { "false" }}
                oninput={oninput}
            />
        </label>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn text_field_renders_label_and_value() {
        let props = Props {
            label: AttrValue::from("Card number"),
            value: AttrValue::from("4111 1111 1111 1111"),
            placeholder: None,
            input_type: None,
            name: None,
            disabled: false,
            invalid: false,
            oninput: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TextField>::with_props(props).render());
        assert!(html.contains("Card number"));
        assert!(html.contains("4111 1111 1111 1111"));
    }

    #[test]
    fn invalid_field_is_marked_for_assistive_tech() {
        let props = Props {
            label: AttrValue::from("CVV"),
            value: AttrValue::from("1"),
            placeholder: None,
            input_type: None,
            name: None,
            disabled: false,
            invalid: true,
            oninput: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<TextField>::with_props(props).render());
        assert!(html.contains("aria-invalid=\"true\""));
        assert!(html.contains("field--invalid"));
    }
}

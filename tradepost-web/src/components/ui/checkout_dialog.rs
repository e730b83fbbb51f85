//! Checkout dialog: delivery plan, contact, and payment sections composed
//! over the shared [`Modal`].

use tradepost_shop::{
    CheckoutDraft, CheckoutField, DeliveryPlan, ValidationError, format_cents,
};
use yew::prelude::*;

use crate::components::button::Button;
use crate::components::input::TextField;
use crate::components::modal::Modal;

#[derive(Properties, PartialEq, Clone)]
pub struct CheckoutDialogProps {
    pub open: bool,
    pub draft: CheckoutDraft,
    pub subtotal_cents: i64,
    pub submitting: bool,
    #[prop_or_default]
    pub validation: Option<ValidationError>,
    #[prop_or_default]
    pub submit_error: Option<String>,
    pub on_close: Callback<()>,
    pub on_select_plan: Callback<DeliveryPlan>,
    pub on_update_field: Callback<(CheckoutField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component(CheckoutDialog)]
pub fn checkout_dialog(props: &CheckoutDialogProps) -> Html {
    let total_cents = props.draft.final_total_cents(props.subtotal_cents);
    let surcharge_cents = props.draft.plan.surcharge_cents();

    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let submit_label = if props.submitting {
        "Placing order..."
    } else {
        "Place order"
    };

    html! {
        <Modal open={props.open} title="Checkout" on_close={props.on_close.clone()}>
            <form class="checkout" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                { render_plan_section(props) }
                { render_contact_section(props) }
                { render_payment_section(props) }
                { render_errors(props) }
                <div class="checkout__totals">
                    <div class="checkout__row">
                        <span>{ "Subtotal" }</span>
                        <span>{ format_cents(props.subtotal_cents) }</span>
                    </div>
                    <div class="checkout__row">
                        <span>{ "Delivery" }</span>
                        <span>{ if surcharge_cents == 0 {
                            "Free".to_string()
                        } else {
                            format_cents(surcharge_cents)
                        } }</span>
                    </div>
                    <div class="checkout__row checkout__row--total" data-testid="checkout-total">
                        <span>{ "Total" }</span>
                        <span>{ format_cents(total_cents) }</span>
                    </div>
                </div>
                <Button
                    label={submit_label}
                    class={classes!("checkout__submit")}
                    disabled={props.submitting}
                    onclick={on_submit}
                />
            </form>
        </Modal>
    }
}

fn render_plan_section(props: &CheckoutDialogProps) -> Html {
    html! {
        <fieldset class="checkout__plans">
            <legend>{ "Delivery plan" }</legend>
            { for DeliveryPlan::ALL.iter().map(|&plan| {
                let selected = props.draft.plan == plan;
                let onclick = {
                    let cb = props.on_select_plan.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(plan))
                };
                let surcharge = if plan.surcharge_cents() == 0 {
                    "Free".to_string()
                } else {
                    format_cents(plan.surcharge_cents())
                };
                html! {
                    <button
                        type="button"
                        class={classes!("plan", selected.then_some("plan--selected"))}
                        aria-pressed={if selected { "true" } else { "false" }}
                        {onclick}
                    >
                        <span class="plan__label">{ plan.label() }</span>
                        <span class="plan__estimate">{ plan.estimate() }</span>
                        <span class="plan__surcharge">{ surcharge }</span>
                    </button>
                }
            }) }
        </fieldset>
    }
}

fn render_contact_section(props: &CheckoutDialogProps) -> Html {
    html! {
        <fieldset class="checkout__contact">
            <legend>{ "Contact information" }</legend>
            { text_field(props, CheckoutField::FullName, None) }
            { text_field(props, CheckoutField::Phone, Some("tel")) }
            { text_field(props, CheckoutField::Email, Some("email")) }
            { text_field(props, CheckoutField::Address, None) }
        </fieldset>
    }
}

fn render_payment_section(props: &CheckoutDialogProps) -> Html {
    html! {
        <fieldset class="checkout__payment">
            <legend>{ "Payment" }</legend>
            { text_field(props, CheckoutField::CardHolder, None) }
            { text_field(props, CheckoutField::CardNumber, None) }
            { text_field(props, CheckoutField::Expiry, None) }
            { text_field(props, CheckoutField::Cvv, Some("password")) }
        </fieldset>
    }
}

fn text_field(
    props: &CheckoutDialogProps,
    field: CheckoutField,
    input_type: Option<&'static str>,
) -> Html {
    let invalid = props
        .validation
        .as_ref()
        .is_some_and(|err| err.mentions(field));
    let oninput = {
        let cb = props.on_update_field.clone();
        Callback::from(move |value: String| cb.emit((field, value)))
    };
    html! {
        <TextField
            label={field.label()}
            value={props.draft.field(field).to_string()}
            input_type={input_type.map(AttrValue::from)}
            disabled={props.submitting}
            {invalid}
            {oninput}
        />
    }
}

fn render_errors(props: &CheckoutDialogProps) -> Html {
    let issues = props
        .validation
        .as_ref()
        .map(|err| err.issues.clone())
        .unwrap_or_default();
    html! {
        <>
            { (!issues.is_empty()).then(|| html! {
                <ul class="checkout__errors" role="alert">
                    { for issues.iter().map(|issue| html! {
                        <li>{ issue.message() }</li>
                    }) }
                </ul>
            }) }
            { props.submit_error.as_ref().map(|message| html! {
                <p class="checkout__submit-error" role="alert">{ message.clone() }</p>
            }) }
        </>
    }
}

//! Callback builders wiring UI events to basket and checkout mutations.
//!
//! Every handler closes over the shared basket plus the state handles it
//! touches, mirroring the one-event-at-a-time browser loop: mutations are
//! synchronous, only `submit` crosses an await point.

use tradepost_shop::{CheckoutDraft, CheckoutError, CheckoutField, DeliveryPlan, ProductSnapshot};
use yew::prelude::*;

use crate::app::state::AppState;

pub struct AppHandlers {
    pub toggle: Callback<ProductSnapshot>,
    pub set_quantity: Callback<(String, String)>,
    pub remove: Callback<String>,
    pub clear: Callback<()>,
    pub open_checkout: Callback<()>,
    pub close_checkout: Callback<()>,
    pub select_plan: Callback<DeliveryPlan>,
    pub update_field: Callback<(CheckoutField, String)>,
    pub submit: Callback<()>,
    pub dismiss_confirmation: Callback<()>,
}

#[must_use]
pub fn build_handlers(state: &AppState) -> AppHandlers {
    AppHandlers {
        toggle: build_toggle(state),
        set_quantity: build_set_quantity(state),
        remove: build_remove(state),
        clear: build_clear(state),
        open_checkout: build_open_checkout(state),
        close_checkout: build_close_checkout(state),
        select_plan: build_select_plan(state),
        update_field: build_update_field(state),
        submit: build_submit(state),
        dismiss_confirmation: build_dismiss_confirmation(state),
    }
}

fn build_toggle(state: &AppState) -> Callback<ProductSnapshot> {
    let app = state.clone();
    Callback::from(move |snapshot: ProductSnapshot| {
        app.basket.borrow_mut().toggle(&snapshot);
        app.sync_basket();
    })
}

fn build_set_quantity(state: &AppState) -> Callback<(String, String)> {
    let app = state.clone();
    Callback::from(move |(product_id, raw): (String, String)| {
        app.basket.borrow_mut().set_quantity(&product_id, &raw);
        app.sync_basket();
    })
}

fn build_remove(state: &AppState) -> Callback<String> {
    let app = state.clone();
    Callback::from(move |product_id: String| {
        app.basket.borrow_mut().remove(&product_id);
        app.sync_basket();
    })
}

fn build_clear(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        app.basket.borrow_mut().clear();
        app.sync_basket();
    })
}

fn build_open_checkout(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        if app.basket.borrow().is_empty() {
            return;
        }
        // A fresh draft every time the dialog opens; drafts never survive
        // a close.
        app.draft.set(CheckoutDraft::new());
        app.validation.set(None);
        app.submit_error.set(None);
        app.checkout_open.set(true);
    })
}

fn build_close_checkout(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        if *app.submitting {
            return;
        }
        app.checkout_open.set(false);
        app.draft.set(CheckoutDraft::new());
        app.validation.set(None);
        app.submit_error.set(None);
    })
}

fn build_select_plan(state: &AppState) -> Callback<DeliveryPlan> {
    let app = state.clone();
    Callback::from(move |plan: DeliveryPlan| {
        let mut draft = (*app.draft).clone();
        draft.select_plan(plan);
        app.draft.set(draft);
    })
}

fn build_update_field(state: &AppState) -> Callback<(CheckoutField, String)> {
    let app = state.clone();
    Callback::from(move |(field, raw): (CheckoutField, String)| {
        let mut draft = (*app.draft).clone();
        draft.set_field(field, &raw);
        app.draft.set(draft);
    })
}

fn build_dismiss_confirmation(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        app.confirmation.set(None);
    })
}

fn build_submit(state: &AppState) -> Callback<()> {
    let app = state.clone();
    Callback::from(move |()| {
        // At most one submission in flight per composer instance.
        if *app.submitting {
            return;
        }

        let order = {
            let store = app.basket.borrow();
            match app.draft.build_order(store.lines(), store.subtotal_cents()) {
                Ok(order) => order,
                Err(CheckoutError::EmptyBasket) => {
                    app.submit_error.set(Some("Your basket is empty".to_string()));
                    return;
                }
                Err(CheckoutError::Validation(err)) => {
                    // Client-side validation blocks the network call entirely.
                    app.validation.set(Some(err));
                    return;
                }
            }
        };

        app.validation.set(None);
        app.submit_error.set(None);
        app.submitting.set(true);

        let app = app.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let token = crate::session::bearer_token();
            match crate::api::submit_order(&order, token.as_deref()).await {
                Ok(confirmed) => {
                    app.basket.borrow_mut().clear();
                    app.sync_basket();
                    app.draft.set(CheckoutDraft::new());
                    app.checkout_open.set(false);
                    app.confirmation.set(Some(confirmed));
                }
                Err(e) => {
                    // Draft and basket stay intact for correction and retry.
                    log::error!("order submission failed: {e}");
                    app.submit_error.set(Some(e.to_string()));
                }
            }
            app.submitting.set(false);
        });
    })
}

use std::cell::RefCell;
use std::rc::Rc;

use tradepost_shop::{
    BasketLine, BasketStore, CheckoutDraft, OrderConfirmation, ProductSnapshot, ValidationError,
};
use yew::prelude::*;

use crate::storage::LocalBasketStorage;

/// The one basket store instance for this tab, shared by every handler.
pub type SharedBasket = Rc<RefCell<BasketStore<LocalBasketStorage>>>;

#[derive(Clone)]
pub struct AppState {
    /// Authoritative basket; mutated through handlers only.
    pub basket: SharedBasket,
    /// Render snapshot of the basket, refreshed after every mutation.
    pub lines: UseStateHandle<Vec<BasketLine>>,
    pub products: UseStateHandle<Vec<ProductSnapshot>>,
    pub checkout_open: UseStateHandle<bool>,
    pub draft: UseStateHandle<CheckoutDraft>,
    /// True while a submission is in flight; the submit action is disabled
    /// and re-entry is refused for the duration.
    pub submitting: UseStateHandle<bool>,
    pub submit_error: UseStateHandle<Option<String>>,
    pub validation: UseStateHandle<Option<ValidationError>>,
    pub confirmation: UseStateHandle<Option<OrderConfirmation>>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let basket: SharedBasket = use_mut_ref(|| BasketStore::open(LocalBasketStorage::new()));
    let lines = {
        let basket = basket.clone();
        use_state(move || basket.borrow().lines().to_vec())
    };
    AppState {
        basket,
        lines,
        products: use_state(Vec::new),
        checkout_open: use_state(|| false),
        draft: use_state(CheckoutDraft::new),
        submitting: use_state(|| false),
        submit_error: use_state(|| None),
        validation: use_state(|| None),
        confirmation: use_state(|| None),
    }
}

impl AppState {
    /// Refresh the render snapshot from the authoritative store.
    pub fn sync_basket(&self) {
        self.lines.set(self.basket.borrow().lines().to_vec());
    }

    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.basket.borrow().subtotal_cents()
    }
}

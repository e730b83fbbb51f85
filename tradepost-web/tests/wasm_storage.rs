//! Browser-only persistence tests over the real localStorage.

#![cfg(target_arch = "wasm32")]

use tradepost_shop::{BasketStore, ProductSnapshot};
use tradepost_web::dom;
use tradepost_web::storage::{BASKET_KEY, LocalBasketStorage};
use wasm_bindgen_test::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn reset_storage() {
    let storage = dom::local_storage().expect("localStorage");
    storage.remove_item(BASKET_KEY).expect("remove key");
}

#[wasm_bindgen_test]
fn basket_round_trips_through_local_storage() {
    reset_storage();

    let mut store = BasketStore::open(LocalBasketStorage::new());
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 1999));
    store.set_quantity("p1", "2");

    let reloaded = BasketStore::open(LocalBasketStorage::new());
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.subtotal_cents(), 3998);
}

#[wasm_bindgen_test]
fn clear_deletes_the_storage_key() {
    reset_storage();

    let mut store = BasketStore::open(LocalBasketStorage::new());
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 1999));
    let storage = dom::local_storage().expect("localStorage");
    assert!(storage.get_item(BASKET_KEY).unwrap().is_some());

    store.clear();
    assert!(storage.get_item(BASKET_KEY).unwrap().is_none());
}

#[wasm_bindgen_test]
fn corrupt_payload_is_tolerated() {
    let storage = dom::local_storage().expect("localStorage");
    storage.set_item(BASKET_KEY, "not json").expect("seed");

    let store = BasketStore::open(LocalBasketStorage::new());
    assert!(store.is_empty());
}

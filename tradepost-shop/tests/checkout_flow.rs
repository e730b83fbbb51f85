//! End-to-end basket -> draft -> order composition scenarios, driven through
//! the same storage seam the browser uses.

use serde_json::Value;
use tradepost_shop::{
    BasketStore, CheckoutDraft, CheckoutField, DeliveryPlan, MemoryBasketStorage, ProductSnapshot,
};

fn fill_checkout(draft: &mut CheckoutDraft) {
    draft.set_field(CheckoutField::FullName, "Grace Hopper");
    draft.set_field(CheckoutField::Phone, "2025550143");
    draft.set_field(CheckoutField::Email, "grace@example.com");
    draft.set_field(CheckoutField::Address, "1 Harbor Lane, Arlington");
    draft.set_field(CheckoutField::CardNumber, "4111111111111111");
    draft.set_field(CheckoutField::Expiry, "0928");
    draft.set_field(CheckoutField::Cvv, "321");
    draft.set_field(CheckoutField::CardHolder, "Grace Hopper");
}

#[test]
fn express_checkout_totals_and_clears_the_basket() {
    let mut store = BasketStore::open(MemoryBasketStorage::new());
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 10_000));
    assert_eq!(store.subtotal_cents(), 10_000);

    let mut draft = CheckoutDraft::new();
    fill_checkout(&mut draft);
    draft.select_plan(DeliveryPlan::Express);

    let order = draft
        .build_order(store.lines(), store.subtotal_cents())
        .expect("order should compose");
    assert!((order.total_price - 115.99).abs() < 1e-9);

    // Backend accepted: the store is cleared, persistence included.
    store.clear();
    assert!(store.is_empty());

    let reloaded = BasketStore::open(MemoryBasketStorage::new());
    assert!(reloaded.is_empty());
}

#[test]
fn order_payload_matches_the_wire_contract() {
    let mut store = BasketStore::open(MemoryBasketStorage::new());
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 1000));
    store.toggle(&ProductSnapshot::new("p2", "Notebook", 550));
    store.set_quantity("p1", "2");
    store.set_quantity("p2", "3");

    let mut draft = CheckoutDraft::new();
    fill_checkout(&mut draft);
    draft.select_plan(DeliveryPlan::Premium);

    let order = draft
        .build_order(store.lines(), store.subtotal_cents())
        .unwrap();
    let value: Value = serde_json::to_value(&order).unwrap();

    assert_eq!(value["products"][0]["product"], "p1");
    assert_eq!(value["products"][0]["quantity"], 2);
    assert_eq!(value["products"][1]["quantity"], 3);
    assert_eq!(value["deliveryPlan"], "premium");
    assert_eq!(value["contactInfo"]["fullName"], "Grace Hopper");
    assert_eq!(value["contactInfo"]["phone"], "202-555-0143");
    assert_eq!(value["paymentInfo"]["cardLast4"], "1111");
    assert_eq!(value["paymentInfo"]["expiry"], "09/28");
    // 3650 subtotal + 2999 premium surcharge.
    assert!((value["totalPrice"].as_f64().unwrap() - 66.49).abs() < 1e-9);

    // Sensitive-data minimization: no cvv, no full card number anywhere.
    let raw = value.to_string();
    assert!(!raw.to_lowercase().contains("cvv"));
    assert!(!raw.contains("4111 1111 1111 1111"));
    assert!(!raw.contains("4111111111111111"));
}

#[test]
fn failed_submission_leaves_basket_and_draft_intact() {
    // The composer only clears state after a backend accept; a reject path
    // must leave everything reusable for retry.
    let mut store = BasketStore::open(MemoryBasketStorage::new());
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 10_000));

    let mut draft = CheckoutDraft::new();
    fill_checkout(&mut draft);

    let first = draft
        .build_order(store.lines(), store.subtotal_cents())
        .unwrap();
    // Simulated reject: nothing is cleared, the same draft composes again.
    let second = draft
        .build_order(store.lines(), store.subtotal_cents())
        .unwrap();
    assert_eq!(first, second);
    assert_eq!(store.len(), 1);
}

#[test]
fn basket_survives_reload_between_sessions() {
    let storage = MemoryBasketStorage::new();
    let mut store = BasketStore::open(storage);
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 1234));
    store.toggle(&ProductSnapshot::new("p2", "Notebook", 99));
    store.set_quantity("p2", "5");
    let payload = store_payload(&store);

    let reloaded = BasketStore::open(MemoryBasketStorage::with_payload(&payload));
    assert_eq!(reloaded.len(), 2);
    assert_eq!(reloaded.subtotal_cents(), 1234 + 99 * 5);
    assert_eq!(reloaded.find_line("p2").unwrap().name, "Notebook");
}

#[test]
fn toggle_round_trip_restores_prior_state() {
    let mut store = BasketStore::open(MemoryBasketStorage::new());
    store.toggle(&ProductSnapshot::new("p1", "Desk lamp", 1000));
    store.set_quantity("p1", "3");
    let before: Vec<_> = store.lines().to_vec();

    let p2 = ProductSnapshot::new("p2", "Notebook", 550);
    store.toggle(&p2);
    store.toggle(&p2);
    assert_eq!(store.lines(), before.as_slice());
}

fn store_payload(store: &BasketStore<MemoryBasketStorage>) -> String {
    serde_json::to_string(store.lines()).unwrap()
}

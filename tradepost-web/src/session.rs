//! Bearer-token stash for the auth collaborator.
//!
//! Token issuance itself lives elsewhere; this module only holds the token
//! for outgoing requests and wires logout to the basket wipe. The basket is
//! keyed per browser, not per account, so logout must clear it explicitly or
//! the next visitor inherits the previous session's basket.

use tradepost_shop::{BasketStorage, BasketStore};

const TOKEN_KEY: &str = "tradepost.token";

/// The stored bearer token, if the visitor is signed in.
#[must_use]
pub fn bearer_token() -> Option<String> {
    crate::dom::local_storage()
        .ok()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

/// Store the token handed over by the auth collaborator after sign-in.
pub fn store_token(token: &str) {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Drop the token and wipe the basket.
pub fn logout<S: BasketStorage>(basket: &mut BasketStore<S>) {
    if let Ok(storage) = crate::dom::local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
    basket.clear();
}

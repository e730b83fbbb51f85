use yew::prelude::*;

use crate::app::state::AppState;

/// Load the catalog once on mount.
#[hook]
pub fn use_bootstrap(state: &AppState) {
    let products = state.products.clone();
    use_effect_with((), move |()| {
        wasm_bindgen_futures::spawn_local(async move {
            match crate::catalog::fetch_products().await {
                Ok(list) => products.set(list),
                Err(e) => log::error!("failed to load catalog: {e}"),
            }
        });
        || {}
    });
}

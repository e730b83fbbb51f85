//! Catalog collaborator client: one GET for the product snapshot list.

use tradepost_shop::ProductSnapshot;

use crate::dom;

const CATALOG_ENDPOINT: &str = "/api/products";

/// Fetch the product snapshots the storefront renders. Stock levels are
/// trusted as reported; the basket never re-checks them.
///
/// # Errors
/// Returns a readable message when the catalog cannot be fetched or parsed.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn fetch_products() -> Result<Vec<ProductSnapshot>, String> {
    let response = dom::fetch_response(CATALOG_ENDPOINT)
        .await
        .map_err(|e| dom::js_error_message(&e))?;
    if !response.ok() {
        return Err(format!("catalog returned status {}", response.status()));
    }
    let text = dom::response_text(&response)
        .await
        .map_err(|e| dom::js_error_message(&e))?;
    serde_json::from_str(&text).map_err(|e| e.to_string())
}

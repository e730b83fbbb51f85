//! Order-submission client.

use tradepost_shop::{OrderConfirmation, OrderRequest, SubmitError};

use crate::dom;

const ORDER_ENDPOINT: &str = "/api/orders";

const FALLBACK_MESSAGE: &str = "Order could not be completed, please try again";

/// POST the composed order to the backend.
///
/// A non-2xx response surfaces the backend's own message verbatim; a network
/// failure maps to the generic retryable [`SubmitError::Unreachable`]. The
/// caller decides what to clear; nothing is mutated here.
///
/// # Errors
/// Returns [`SubmitError`] when the backend rejects the order or cannot be
/// reached.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn submit_order(
    order: &OrderRequest,
    bearer: Option<&str>,
) -> Result<OrderConfirmation, SubmitError> {
    let body =
        serde_json::to_string(order).map_err(|e| SubmitError::Rejected(e.to_string()))?;

    let response = dom::post_json(ORDER_ENDPOINT, &body, bearer)
        .await
        .map_err(|e| {
            log::error!(
                "order submission unreachable: {}",
                dom::js_error_message(&e)
            );
            SubmitError::Unreachable
        })?;

    let text = dom::response_text(&response).await.unwrap_or_default();
    if response.ok() {
        Ok(serde_json::from_str(&text).unwrap_or_default())
    } else {
        Err(SubmitError::Rejected(extract_message(&text)))
    }
}

/// Pull the human-readable `message` field out of an error body, falling
/// back to a generic retry prompt when the body is opaque.
fn extract_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

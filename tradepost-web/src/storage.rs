//! localStorage-backed basket persistence.

use thiserror::Error;
use tradepost_shop::{BasketLine, BasketStorage};

use crate::dom;

/// The single storage key the basket lives under. Owned exclusively by
/// [`LocalBasketStorage`]; nothing else may write it.
pub const BASKET_KEY: &str = "tradepost.basket";

#[derive(Debug, Error)]
pub enum StorageError {
    /// Storage is disabled or the window is gone; the session keeps running
    /// on in-memory state.
    #[error("localStorage unavailable: {0}")]
    Unavailable(String),
    /// The write was refused, typically quota exhaustion. The previously
    /// persisted payload is untouched.
    #[error("storage rejected the write: {0}")]
    WriteRejected(String),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

/// Persists the basket as a JSON array under [`BASKET_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalBasketStorage;

impl LocalBasketStorage {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        dom::local_storage().map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))
    }
}

impl BasketStorage for LocalBasketStorage {
    type Error = StorageError;

    fn load(&self) -> Result<Option<Vec<BasketLine>>, Self::Error> {
        let storage = Self::storage()?;
        let payload = storage
            .get_item(BASKET_KEY)
            .map_err(|e| StorageError::Unavailable(dom::js_error_message(&e)))?;
        match payload {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    fn save(&self, lines: &[BasketLine]) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        let payload = serde_json::to_string(lines)?;
        storage
            .set_item(BASKET_KEY, &payload)
            .map_err(|e| StorageError::WriteRejected(dom::js_error_message(&e)))
    }

    fn clear(&self) -> Result<(), Self::Error> {
        let storage = Self::storage()?;
        storage
            .remove_item(BASKET_KEY)
            .map_err(|e| StorageError::WriteRejected(dom::js_error_message(&e)))
    }
}

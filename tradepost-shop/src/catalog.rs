//! Product snapshots supplied by the catalog collaborator.

use serde::{Deserialize, Serialize};

/// A product as the catalog describes it at browse time.
///
/// Everything besides `id` is a display-only copy; the basket snapshots these
/// fields at add time and never re-fetches them, so they may go stale
/// relative to the live catalog. Missing fields default rather than failing
/// the whole payload; an empty `id` is rejected later, at insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProductSnapshot {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Unit price in cents to avoid floating-point issues.
    #[serde(default)]
    pub price_cents: i64,
    /// Stock as reported by the catalog; trusted at add time, never
    /// re-checked client-side.
    #[serde(default)]
    pub stock_level: i32,
}

impl ProductSnapshot {
    /// Minimal snapshot constructor used by tests and fixtures.
    #[must_use]
    pub fn new(id: &str, name: &str, price_cents: i64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_payload_deserializes_with_defaults() {
        let snapshot: ProductSnapshot =
            serde_json::from_str(r#"{"id":"p1","name":"Lamp"}"#).unwrap();
        assert_eq!(snapshot.id, "p1");
        assert_eq!(snapshot.price_cents, 0);
        assert_eq!(snapshot.stock_level, 0);
        assert!(snapshot.image_url.is_empty());
    }

    #[test]
    fn idless_payload_still_parses() {
        // Rejection happens at basket insertion, not here.
        let snapshot: ProductSnapshot = serde_json::from_str(r#"{"name":"Lamp"}"#).unwrap();
        assert!(snapshot.id.is_empty());
    }
}

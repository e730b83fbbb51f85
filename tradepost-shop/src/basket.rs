//! Basket state and write-through persistence.
//!
//! [`BasketStore`] is the single source of truth for what the current
//! visitor intends to buy. Every mutation is immediately re-persisted
//! through the [`BasketStorage`] handle; when a write fails the in-memory
//! state stays authoritative for the session and the failure is logged,
//! never raised to the caller.

use std::cell::RefCell;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::BasketStorage;
use crate::catalog::ProductSnapshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BasketError {
    /// The product snapshot carries no usable id; the mutation is rejected.
    #[error("product snapshot is missing an id")]
    MalformedLine,
}

const fn default_quantity() -> u32 {
    1
}

/// One product entry in the basket with its own quantity.
///
/// Display fields are snapshotted from the catalog at add time and may go
/// stale; only `product_id` and `quantity` ever change meaning afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasketLine {
    pub product_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Unit price in cents, snapshotted at add time. A persisted line that
    /// lost its price deserializes to 0 and contributes nothing.
    #[serde(default)]
    pub unit_price_cents: i64,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl BasketLine {
    /// Validated construction from a catalog snapshot: the one place
    /// malformed products are rejected, so every downstream read can assume
    /// a well-typed line.
    ///
    /// # Errors
    ///
    /// Returns [`BasketError::MalformedLine`] when the snapshot id is empty.
    pub fn from_snapshot(snapshot: &ProductSnapshot) -> Result<Self, BasketError> {
        if snapshot.id.trim().is_empty() {
            return Err(BasketError::MalformedLine);
        }
        Ok(Self {
            product_id: snapshot.id.clone(),
            name: snapshot.name.clone(),
            description: snapshot.description.clone(),
            image_url: snapshot.image_url.clone(),
            unit_price_cents: snapshot.price_cents.max(0),
            quantity: 1,
        })
    }

    /// Price times quantity for this line, in cents.
    #[must_use]
    pub fn line_total_cents(&self) -> i64 {
        self.unit_price_cents
            .max(0)
            .saturating_mul(i64::from(self.quantity))
    }
}

/// Parse a raw quantity edit, flooring to 1 on any invalid input.
#[must_use]
pub fn parse_quantity(raw: &str) -> u32 {
    raw.trim().parse::<u32>().map_or(1, |q| q.max(1))
}

/// The visitor's basket plus its persistence handle.
///
/// Cross-tab note: two tabs opening stores over the same storage key
/// overwrite each other last-write-wins; within one tab all mutations run on
/// the event loop and are serialized.
pub struct BasketStore<S: BasketStorage> {
    lines: Vec<BasketLine>,
    storage: S,
}

impl<S: BasketStorage> BasketStore<S> {
    /// Hydrate a store from persisted state. A corrupt or unreadable payload
    /// is logged and treated as empty; well-formed lines in a partially
    /// malformed array are kept, id-less ones dropped.
    pub fn open(storage: S) -> Self {
        let lines = match storage.load() {
            Ok(Some(mut lines)) => {
                let before = lines.len();
                lines.retain(|line| !line.product_id.trim().is_empty());
                if lines.len() < before {
                    log::warn!(
                        "dropped {} malformed basket line(s) during hydration",
                        before - lines.len()
                    );
                }
                for line in &mut lines {
                    line.quantity = line.quantity.max(1);
                    line.unit_price_cents = line.unit_price_cents.max(0);
                }
                lines
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                log::warn!("failed to load persisted basket: {e}");
                Vec::new()
            }
        };
        Self { lines, storage }
    }

    /// Add the product if absent, remove it if present.
    ///
    /// A snapshot without an id is rejected and logged; the basket is left
    /// untouched.
    pub fn toggle(&mut self, snapshot: &ProductSnapshot) {
        match BasketLine::from_snapshot(snapshot) {
            Ok(line) => {
                if self.contains(&line.product_id) {
                    self.lines.retain(|l| l.product_id != line.product_id);
                } else {
                    self.lines.push(line);
                }
                self.persist();
            }
            Err(e) => log::warn!("rejected basket mutation: {e}"),
        }
    }

    /// Update the quantity of an existing line in place. Unparsable or
    /// sub-1 input floors to 1; an absent id is a no-op.
    pub fn set_quantity(&mut self, product_id: &str, raw: &str) {
        let quantity = parse_quantity(raw);
        if let Some(line) = self.find_line_mut(product_id) {
            line.quantity = quantity;
            self.persist();
        }
    }

    /// Remove a line outright; no-op when absent.
    pub fn remove(&mut self, product_id: &str) {
        let before = self.lines.len();
        self.lines.retain(|l| l.product_id != product_id);
        if self.lines.len() != before {
            self.persist();
        }
    }

    /// Empty the basket and delete the persisted payload entirely.
    pub fn clear(&mut self) {
        self.lines.clear();
        if let Err(e) = self.storage.clear() {
            log::warn!("failed to clear persisted basket: {e}");
        }
    }

    /// Sum of line totals in cents. Pure read, recomputed every call;
    /// malformed contributions count as 0, never poisoning the total.
    #[must_use]
    pub fn subtotal_cents(&self) -> i64 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.line_total_cents()))
    }

    #[must_use]
    pub fn lines(&self) -> &[BasketLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Sum of quantities across all lines, for the badge count.
    #[must_use]
    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |acc, line| acc.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn contains(&self, product_id: &str) -> bool {
        self.find_line(product_id).is_some()
    }

    #[must_use]
    pub fn find_line(&self, product_id: &str) -> Option<&BasketLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    fn find_line_mut(&mut self, product_id: &str) -> Option<&mut BasketLine> {
        self.lines.iter_mut().find(|l| l.product_id == product_id)
    }

    fn persist(&self) {
        if let Err(e) = self.storage.save(&self.lines) {
            log::warn!("failed to persist basket: {e}");
        }
    }
}

/// In-memory [`BasketStorage`] backend.
///
/// Serializes through JSON exactly like the browser backend so tests
/// exercise the same serde path. Also serves headless runs where no durable
/// storage exists.
#[derive(Debug, Default)]
pub struct MemoryBasketStorage {
    cell: RefCell<Option<String>>,
}

impl MemoryBasketStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the backend with a raw payload, corrupt ones included.
    #[must_use]
    pub fn with_payload(payload: &str) -> Self {
        Self {
            cell: RefCell::new(Some(payload.to_string())),
        }
    }

    /// The raw persisted payload, if any.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.cell.borrow().clone()
    }
}

impl BasketStorage for MemoryBasketStorage {
    type Error = serde_json::Error;

    fn load(&self) -> Result<Option<Vec<BasketLine>>, Self::Error> {
        self.cell
            .borrow()
            .as_deref()
            .map(serde_json::from_str)
            .transpose()
    }

    fn save(&self, lines: &[BasketLine]) -> Result<(), Self::Error> {
        let payload = serde_json::to_string(lines)?;
        *self.cell.borrow_mut() = Some(payload);
        Ok(())
    }

    fn clear(&self) -> Result<(), Self::Error> {
        *self.cell.borrow_mut() = None;
        Ok(())
    }
}

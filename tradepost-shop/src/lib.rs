//! Tradepost Shop Core
//!
//! Platform-agnostic basket and checkout logic for the Tradepost storefront.
//! This crate owns every rule about what the visitor intends to buy and how
//! that intent becomes an order request, without UI or browser-specific
//! dependencies.

pub mod basket;
pub mod catalog;
pub mod checkout;
pub mod delivery;
pub mod format;
pub mod money;

// Re-export commonly used types
pub use basket::{BasketError, BasketLine, BasketStore, MemoryBasketStorage, parse_quantity};
pub use catalog::ProductSnapshot;
pub use checkout::{
    CheckoutDraft, CheckoutError, CheckoutField, ContactInfo, FieldIssue, FieldProblem,
    OrderConfirmation, OrderLine, OrderRequest, PaymentDigest, PaymentFields, SubmitError,
    ValidationError,
};
pub use delivery::DeliveryPlan;
pub use money::{cents_to_dollars, format_cents};

/// Trait for abstracting basket persistence.
/// Platform-specific implementations should provide this.
///
/// The persisted basket is owned exclusively by [`BasketStore`]; no other
/// component may write to the underlying key. Two browser tabs sharing the
/// same key overwrite each other last-write-wins; no reconciliation is
/// attempted.
pub trait BasketStorage {
    type Error: std::error::Error;

    /// Load the persisted basket lines, `None` when nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the persisted payload cannot be read or parsed.
    fn load(&self) -> Result<Option<Vec<BasketLine>>, Self::Error>;

    /// Persist the full basket, replacing any previous payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the basket cannot be written.
    fn save(&self, lines: &[BasketLine]) -> Result<(), Self::Error>;

    /// Delete the persisted payload entirely (not just an empty array) so a
    /// later corrupt read cannot resurrect stale data.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be removed.
    fn clear(&self) -> Result<(), Self::Error>;
}

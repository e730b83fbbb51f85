//! Checkout draft state, validation, and order-request composition.
//!
//! A [`CheckoutDraft`] lives only while the checkout dialog is open: it is
//! created fresh, mutated through [`CheckoutDraft::set_field`] (which applies
//! the per-field formatter), validated as an aggregate, and finally composed
//! into an [`OrderRequest`]. The full card number and CVV never leave the
//! draft; the payload carries only a last-4 digest.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::basket::BasketLine;
use crate::delivery::DeliveryPlan;
use crate::format;
use crate::money;

/// Closed set of checkout form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckoutField {
    FullName,
    Phone,
    Email,
    Address,
    CardNumber,
    Expiry,
    Cvv,
    CardHolder,
}

impl CheckoutField {
    /// Every field is required before an order can be composed.
    pub const REQUIRED: [Self; 8] = [
        Self::FullName,
        Self::Phone,
        Self::Email,
        Self::Address,
        Self::CardNumber,
        Self::Expiry,
        Self::Cvv,
        Self::CardHolder,
    ];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FullName => "Full name",
            Self::Phone => "Phone number",
            Self::Email => "Email",
            Self::Address => "Delivery address",
            Self::CardNumber => "Card number",
            Self::Expiry => "Expiry date",
            Self::Cvv => "CVV",
            Self::CardHolder => "Cardholder name",
        }
    }
}

impl fmt::Display for CheckoutField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Contact section of the draft. Serialized as-is into the order payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub full_name: String,
    /// Stored pre-formatted in grouped `XXX-XXX-XXXX` form.
    pub phone: String,
    pub email: String,
    pub address: String,
}

/// Payment section of the draft.
///
/// Deliberately not `Serialize`: the full card number and CVV must never be
/// written out whole. The order payload carries a [`PaymentDigest`] instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaymentFields {
    /// Grouped display form, e.g. `4111 1111 1111 1111`.
    pub card_number: String,
    /// `MM/YY`.
    pub expiry: String,
    pub cvv: String,
    pub card_holder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldProblem {
    Missing,
    Invalid,
}

/// One failed field, with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: CheckoutField,
    pub problem: FieldProblem,
}

impl FieldIssue {
    #[must_use]
    pub fn message(&self) -> String {
        match self.problem {
            FieldProblem::Missing => format!("{} is required", self.field.label()),
            FieldProblem::Invalid => format!("{} is incomplete or invalid", self.field.label()),
        }
    }
}

/// Aggregate of every failed field, reported in one pass so the form can
/// show all problems at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", self.summary())]
pub struct ValidationError {
    pub issues: Vec<FieldIssue>,
}

impl ValidationError {
    #[must_use]
    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(FieldIssue::message)
            .collect::<Vec<_>>()
            .join("; ")
    }

    #[must_use]
    pub fn mentions(&self, field: CheckoutField) -> bool {
        self.issues.iter().any(|issue| issue.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("the basket is empty")]
    EmptyBasket,
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Failure surfaced by the order-submission collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The backend rejected the order; the message is shown verbatim.
    #[error("{0}")]
    Rejected(String),
    /// The backend could not be reached; retrying is safe.
    #[error("could not reach the order service, please try again")]
    Unreachable,
}

/// One basket line as the order endpoint expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product: String,
    pub quantity: u32,
}

/// Sensitive-data minimization boundary: only the cardholder, the last four
/// digits, and the expiry leave the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDigest {
    pub card_holder: String,
    pub card_last4: String,
    pub expiry: String,
}

/// The request body POSTed to the order-submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub products: Vec<OrderLine>,
    /// Dollars with two decimal places; internal math stays in cents.
    pub total_price: f64,
    pub delivery_plan: DeliveryPlan,
    pub contact_info: ContactInfo,
    pub payment_info: PaymentDigest,
}

/// Successful order response; carries enough to navigate to confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub message: String,
}

/// The in-progress checkout: plan selection plus contact and payment fields.
///
/// Transient by design; never persisted across reloads, discarded on
/// close or successful submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutDraft {
    pub contact: ContactInfo,
    pub payment: PaymentFields,
    pub plan: DeliveryPlan,
}

impl CheckoutDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exactly one plan is selected at any time; this swaps it.
    pub fn select_plan(&mut self, plan: DeliveryPlan) {
        self.plan = plan;
    }

    /// Apply the field's formatter to the raw input and store the formatted
    /// form. Free-text fields pass through unchanged.
    pub fn set_field(&mut self, field: CheckoutField, raw: &str) {
        match field {
            CheckoutField::FullName => self.contact.full_name = raw.to_string(),
            CheckoutField::Phone => self.contact.phone = format::format_phone(raw),
            CheckoutField::Email => self.contact.email = raw.to_string(),
            CheckoutField::Address => self.contact.address = raw.to_string(),
            CheckoutField::CardNumber => {
                self.payment.card_number = format::format_card_number(raw);
            }
            CheckoutField::Expiry => self.payment.expiry = format::format_expiry(raw),
            CheckoutField::Cvv => self.payment.cvv = format::format_cvv(raw),
            CheckoutField::CardHolder => self.payment.card_holder = raw.to_string(),
        }
    }

    #[must_use]
    pub fn field(&self, field: CheckoutField) -> &str {
        match field {
            CheckoutField::FullName => &self.contact.full_name,
            CheckoutField::Phone => &self.contact.phone,
            CheckoutField::Email => &self.contact.email,
            CheckoutField::Address => &self.contact.address,
            CheckoutField::CardNumber => &self.payment.card_number,
            CheckoutField::Expiry => &self.payment.expiry,
            CheckoutField::Cvv => &self.payment.cvv,
            CheckoutField::CardHolder => &self.payment.card_holder,
        }
    }

    /// Basket subtotal plus the selected plan's surcharge, in cents.
    #[must_use]
    pub const fn final_total_cents(&self, subtotal_cents: i64) -> i64 {
        subtotal_cents.saturating_add(self.plan.surcharge_cents())
    }

    /// Check every required field and every format rule, collecting all
    /// failures into one [`ValidationError`]. Never stops at the first.
    ///
    /// # Errors
    ///
    /// Returns the aggregate when at least one field is missing or invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut issues = Vec::new();

        for field in CheckoutField::REQUIRED {
            if self.field(field).trim().is_empty() {
                issues.push(FieldIssue {
                    field,
                    problem: FieldProblem::Missing,
                });
            }
        }

        // Format rules apply only to non-empty fields so each field reports
        // a single issue.
        if !self.payment.card_number.is_empty()
            && format::digits(&self.payment.card_number).len() != 16
        {
            issues.push(FieldIssue {
                field: CheckoutField::CardNumber,
                problem: FieldProblem::Invalid,
            });
        }
        if !self.payment.expiry.is_empty() && !expiry_is_valid(&self.payment.expiry) {
            issues.push(FieldIssue {
                field: CheckoutField::Expiry,
                problem: FieldProblem::Invalid,
            });
        }
        if !self.payment.cvv.is_empty() && format::digits(&self.payment.cvv).len() != 3 {
            issues.push(FieldIssue {
                field: CheckoutField::Cvv,
                problem: FieldProblem::Invalid,
            });
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { issues })
        }
    }

    /// Compose the order request from a validated draft and a non-empty
    /// basket. The client never sends the full card number or the CVV.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyBasket`] for an empty basket and
    /// [`CheckoutError::Validation`] when [`Self::validate`] fails.
    pub fn build_order(
        &self,
        lines: &[BasketLine],
        subtotal_cents: i64,
    ) -> Result<OrderRequest, CheckoutError> {
        if lines.is_empty() {
            return Err(CheckoutError::EmptyBasket);
        }
        self.validate()?;

        Ok(OrderRequest {
            products: lines
                .iter()
                .map(|line| OrderLine {
                    product: line.product_id.clone(),
                    quantity: line.quantity,
                })
                .collect(),
            total_price: money::cents_to_dollars(self.final_total_cents(subtotal_cents)),
            delivery_plan: self.plan,
            contact_info: self.contact.clone(),
            payment_info: PaymentDigest {
                card_holder: self.payment.card_holder.clone(),
                card_last4: format::card_last4(&self.payment.card_number),
                expiry: self.payment.expiry.clone(),
            },
        })
    }
}

/// `MM/YY` with a month in 01..=12.
fn expiry_is_valid(expiry: &str) -> bool {
    let ds = format::digits(expiry);
    if ds.len() != 4 {
        return false;
    }
    ds[..2].parse::<u32>().is_ok_and(|month| (1..=12).contains(&month))
}

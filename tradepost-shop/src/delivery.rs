//! Delivery plan tiers and their surcharges.

use serde::{Deserialize, Serialize};

/// Shipping-speed tier selected during checkout.
///
/// A closed enum rather than string keys so that surcharge and label lookups
/// are exhaustive at compile time. Exactly one plan is selected at any time;
/// the checkout draft defaults to [`DeliveryPlan::Standard`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryPlan {
    #[default]
    Standard,
    Express,
    Premium,
}

impl DeliveryPlan {
    pub const ALL: [Self; 3] = [Self::Standard, Self::Express, Self::Premium];

    /// Flat surcharge in cents added to the basket subtotal.
    #[must_use]
    pub const fn surcharge_cents(self) -> i64 {
        match self {
            Self::Standard => 0,
            Self::Express => 1599,
            Self::Premium => 2999,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard Delivery",
            Self::Express => "Express Delivery",
            Self::Premium => "Premium Delivery",
        }
    }

    /// Rough time-to-door estimate shown next to the label.
    #[must_use]
    pub const fn estimate(self) -> &'static str {
        match self {
            Self::Standard => "5-7 business days",
            Self::Express => "2-3 business days",
            Self::Premium => "Next business day",
        }
    }

    /// Stable string key used in form values and the order payload.
    #[must_use]
    pub const fn as_key(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Express => "express",
            Self::Premium => "premium",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "standard" => Some(Self::Standard),
            "express" => Some(Self::Express),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}

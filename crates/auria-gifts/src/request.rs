//! Gift recommendation requests.

use serde::{Deserialize, Serialize};

use crate::GiftError;

/// Occasions offered by the gift finder form.
pub const OCCASIONS: [&str; 5] = ["Anniversary", "Birthday", "Wedding", "Graduation", "Just Because"];

/// Recipients offered by the gift finder form.
pub const RECIPIENTS: [&str; 5] = ["Partner", "Mother", "Friend", "Sister", "Self"];

/// Budget slider lower bound, in USD.
pub const BUDGET_MIN: f64 = 100.0;
/// Budget slider upper bound, in USD.
pub const BUDGET_MAX: f64 = 5000.0;
/// Budget slider step, in USD.
pub const BUDGET_STEP: f64 = 50.0;
/// Budget the form starts at, in USD.
pub const BUDGET_DEFAULT: f64 = 1000.0;

/// What the shopper is looking for. Field names are the wire contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GiftRequest {
    pub occasion: String,
    pub recipient: String,
    /// Budget in USD.
    pub budget: f64,
}

impl GiftRequest {
    pub fn new(occasion: impl Into<String>, recipient: impl Into<String>, budget: f64) -> Self {
        Self {
            occasion: occasion.into(),
            recipient: recipient.into(),
            budget,
        }
    }

    /// Check the required fields.
    ///
    /// The form's suggested choices and slider bounds are not enforced;
    /// any non-blank text and any finite non-negative budget pass.
    pub fn validate(&self) -> Result<(), GiftError> {
        if self.occasion.trim().is_empty() {
            return Err(GiftError::validation("occasion", "Please select an occasion."));
        }
        if self.recipient.trim().is_empty() {
            return Err(GiftError::validation("recipient", "Please select a recipient."));
        }
        if !self.budget.is_finite() || self.budget < 0.0 {
            return Err(GiftError::validation(
                "budget",
                "Budget must be a non-negative amount.",
            ));
        }
        Ok(())
    }
}

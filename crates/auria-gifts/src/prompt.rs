//! Prompt rendering.

use std::borrow::Cow;

use tera::{Context, Tera};

use crate::{GiftRequest, ServiceError};

const GIFT_PROMPT: &str = "You are a personal shopping assistant for a luxury jewellery store.

Based on the occasion, recipient, and budget provided, recommend a specific jewellery item from the store and explain why it is a suitable gift.

Occasion: {{ occasion }}
Recipient: {{ recipient }}
Budget: ${{ budget }} USD

Ensure the recommendation aligns with the brand's image of timeless elegance and high-quality craftsmanship. Consider the persona needs.
";

/// Text template filled with a [`GiftRequest`].
///
/// Exposes `occasion`, `recipient` and `budget` to the template. Values are
/// inserted verbatim, without HTML escaping.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    source: Cow<'static, str>,
}

impl PromptTemplate {
    /// Use a custom template source.
    pub fn custom(source: impl Into<String>) -> Self {
        Self {
            source: Cow::Owned(source.into()),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn render(&self, request: &GiftRequest) -> Result<String, ServiceError> {
        let mut context = Context::new();
        context.insert("occasion", &request.occasion);
        context.insert("recipient", &request.recipient);
        context.insert("budget", &format_budget(request.budget));
        Ok(Tera::one_off(&self.source, &context, false)?)
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self {
            source: Cow::Borrowed(GIFT_PROMPT),
        }
    }
}

/// `500.0` renders as `500`, `499.5` as `499.5`.
fn format_budget(budget: f64) -> String {
    budget.to_string()
}

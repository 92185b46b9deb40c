//! Gift recommendations for the Auria storefront.
//!
//! A shopper picks an occasion, a recipient and a budget; the flow fills a
//! prompt template, asks a hosted language model for a structured answer
//! and returns the recommendation text.
//!
//! # Example
//!
//! ```rust,ignore
//! use auria_gifts::{GenerationConfig, GiftAdvisor, GiftRequest, HttpGenerationService};
//!
//! let service = HttpGenerationService::new(GenerationConfig::new(api_key))?;
//! let advisor = GiftAdvisor::new(service);
//!
//! let request = GiftRequest::new("Anniversary", "Partner", 1500.0);
//! match advisor.recommend(&request).await {
//!     Ok(rec) => println!("{}", rec.recommendation),
//!     Err(err) => eprintln!("{err}"),
//! }
//! ```

mod error;
mod flow;
mod prompt;
mod request;
mod response;
mod service;

pub use error::{GiftError, ServiceError};
pub use flow::GiftAdvisor;
pub use prompt::PromptTemplate;
pub use request::{
    GiftRequest, BUDGET_DEFAULT, BUDGET_MAX, BUDGET_MIN, BUDGET_STEP, OCCASIONS, RECIPIENTS,
};
pub use response::{parse_recommendation, GiftRecommendation};
pub use service::{
    first_candidate_text, request_body, GenerationConfig, GenerationService,
    HttpGenerationService, DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{
        GenerationConfig, GenerationService, GiftAdvisor, GiftError, GiftRecommendation,
        GiftRequest, HttpGenerationService,
    };
}

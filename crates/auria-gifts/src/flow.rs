//! The gift recommendation flow.

use std::time::Instant;

use tracing::{error, info, warn};

use crate::{
    parse_recommendation, GenerationService, GiftError, GiftRecommendation, GiftRequest,
    PromptTemplate, ServiceError,
};

/// Validates a request, renders the prompt, calls the generation service
/// once and validates its answer.
pub struct GiftAdvisor<S> {
    service: S,
    template: PromptTemplate,
}

impl<S: GenerationService> GiftAdvisor<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            template: PromptTemplate::default(),
        }
    }

    /// Replace the prompt template.
    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Produce a recommendation.
    ///
    /// Invalid input fails with [`GiftError::Validation`] before any call is
    /// made. Every later failure is logged and reported as
    /// [`GiftError::Unavailable`].
    pub async fn recommend(&self, request: &GiftRequest) -> Result<GiftRecommendation, GiftError> {
        if let Err(err) = request.validate() {
            warn!(error = %err, "gift request rejected");
            return Err(err);
        }

        info!(
            occasion = %request.occasion,
            recipient = %request.recipient,
            budget = request.budget,
            "gift recommendation requested"
        );
        let started = Instant::now();

        match self.try_recommend(request).await {
            Ok(recommendation) => {
                info!(
                    latency_ms = started.elapsed().as_millis() as u64,
                    "gift recommendation ready"
                );
                Ok(recommendation)
            }
            Err(err) => {
                error!(
                    error = %err,
                    latency_ms = started.elapsed().as_millis() as u64,
                    "gift recommendation failed"
                );
                Err(GiftError::Unavailable)
            }
        }
    }

    async fn try_recommend(&self, request: &GiftRequest) -> Result<GiftRecommendation, ServiceError> {
        let prompt = self.template.render(request)?;
        let raw = self.service.generate(&prompt).await?;
        parse_recommendation(&raw)
    }
}

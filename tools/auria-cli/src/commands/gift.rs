//! Gift recommendation command.

use anyhow::{bail, Result};
use auria_gifts::{GiftAdvisor, GiftError, GiftRequest, HttpGenerationService, OCCASIONS, RECIPIENTS};

use super::GiftArgs;
use crate::context::Context;

/// Run the gift command.
pub async fn run(args: GiftArgs, ctx: &Context) -> Result<()> {
    let request = GiftRequest::new(args.occasion, args.recipient, args.budget);

    // Fail on bad input before touching config or the network.
    if let Err(GiftError::Validation { field, message }) = request.validate() {
        bail!("Invalid {}: {}", field, message);
    }
    if !OCCASIONS.contains(&request.occasion.as_str()) {
        ctx.output
            .debug(&format!("Occasion '{}' is not one of {:?}", request.occasion, OCCASIONS));
    }
    if !RECIPIENTS.contains(&request.recipient.as_str()) {
        ctx.output
            .debug(&format!("Recipient '{}' is not one of {:?}", request.recipient, RECIPIENTS));
    }

    let service = HttpGenerationService::new(ctx.config.generation_config()?)?;
    let advisor = GiftAdvisor::new(service);

    let spinner = ctx.output.spinner("Finding the perfect gift...");
    let result = advisor.recommend(&request).await;
    spinner.finish_and_clear();

    match result {
        Ok(recommendation) => {
            if ctx.output.is_json() {
                ctx.output.json(&recommendation);
                return Ok(());
            }
            ctx.output.header("Our Recommendation");
            ctx.output.text(&recommendation.recommendation);
            Ok(())
        }
        Err(err) => bail!("{}", err),
    }
}

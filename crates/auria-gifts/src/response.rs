//! Parsing model output into a recommendation.

use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// The structured output of the gift flow. Field name is the wire contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftRecommendation {
    pub recommendation: String,
}

/// Parse the model's raw text into a recommendation.
///
/// Accepts a bare JSON object or one wrapped in surrounding prose or code
/// fences. The recommendation must be non-blank; it is returned trimmed.
pub fn parse_recommendation(raw: &str) -> Result<GiftRecommendation, ServiceError> {
    let json = extract_json_object(raw)
        .ok_or_else(|| ServiceError::MalformedBody("no JSON object in model output".into()))?;
    let parsed: GiftRecommendation = serde_json::from_str(json)?;
    let recommendation = parsed.recommendation.trim();
    if recommendation.is_empty() {
        return Err(ServiceError::EmptyRecommendation);
    }
    Ok(GiftRecommendation {
        recommendation: recommendation.to_string(),
    })
}

/// The outermost `{ ... }` span of `raw`.
fn extract_json_object(raw: &str) -> Option<&str> {
    let start = raw.find('{')?;
    let end = raw.rfind('}')?;
    if end <= start {
        return None;
    }
    Some(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_object() {
        let rec = parse_recommendation(r#"{"recommendation":"The Vintage Sapphire Ring."}"#).unwrap();
        assert_eq!(rec.recommendation, "The Vintage Sapphire Ring.");
    }

    #[test]
    fn test_parse_fenced_object() {
        let raw = "```json\n{\"recommendation\": \"  Pearl Charm Bracelet  \"}\n```";
        assert_eq!(parse_recommendation(raw).unwrap().recommendation, "Pearl Charm Bracelet");
    }

    #[test]
    fn test_missing_object() {
        assert!(matches!(
            parse_recommendation("I recommend a ring."),
            Err(ServiceError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_wrong_shape() {
        assert!(matches!(
            parse_recommendation(r#"{"gift": "ring"}"#),
            Err(ServiceError::MalformedBody(_))
        ));
    }

    #[test]
    fn test_blank_recommendation() {
        assert!(matches!(
            parse_recommendation(r#"{"recommendation": "   "}"#),
            Err(ServiceError::EmptyRecommendation)
        ));
    }
}

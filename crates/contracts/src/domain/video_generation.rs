use serde::{Deserialize, Serialize};

use crate::shared::validation::ValidationRules;

/// Acceptance rule for the prompt field: non-empty, bounded length.
pub const PROMPT_RULES: ValidationRules = ValidationRules::required().with_max_length(1000);

/// Request body for the video generation endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateVideoRequest {
    pub prompt: String,
}

/// Response body of the generation endpoint: an ordered collection of
/// media locators. The page consumes the first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerateVideoResponse(pub Vec<String>);

impl GenerateVideoResponse {
    /// The locator shown to the user, if the service produced any.
    pub fn into_first(self) -> Option<String> {
        self.0.into_iter().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_decodes_bare_array() {
        let body = r#"["https://cdn/video1.mp4", "https://cdn/video2.mp4"]"#;
        let response: GenerateVideoResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.0.len(), 2);
        assert_eq!(
            response.into_first(),
            Some("https://cdn/video1.mp4".to_string())
        );
    }

    #[test]
    fn test_empty_collection_has_no_first() {
        let response: GenerateVideoResponse = serde_json::from_str("[]").unwrap();
        assert_eq!(response.into_first(), None);
    }

    #[test]
    fn test_request_wire_shape() {
        let request = GenerateVideoRequest {
            prompt: "Clown fish swimming around a coral reef".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"prompt":"Clown fish swimming around a coral reef"}"#
        );
    }

    #[test]
    fn test_prompt_rules_reject_empty() {
        assert!(PROMPT_RULES.validate_string("", "Prompt").is_err());
        assert!(PROMPT_RULES.validate_string("  ", "Prompt").is_err());
        assert!(PROMPT_RULES
            .validate_string("Clown fish swimming around a coral reef", "Prompt")
            .is_ok());
    }
}

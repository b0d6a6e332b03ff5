//! Gateway contract types and Gemini wire DTOs.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// ============================================================================
// Contract types
// ============================================================================

/// Result of an eyewear donation evaluation.
///
/// The service is asked for `credits` in the 10–100 range and a localized
/// impact summary and checklist. The range is a contract with the model,
/// not validated on this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlassesEvaluation {
    pub credits: i32,
    pub impact_summary: String,
    pub verification_checklist: Vec<String>,
}

/// Inline image payload attached to an evaluation request.
///
/// `data` is the base64-encoded image body (without any data-URL prefix).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ImageAttachment {
    pub mime_type: String,
    pub data: String,
}

impl ImageAttachment {
    /// Create a JPEG attachment from base64 data.
    pub fn jpeg(data: impl Into<String>) -> Self {
        Self {
            mime_type: "image/jpeg".to_string(),
            data: data.into(),
        }
    }
}

// ============================================================================
// Gemini wire format (generateContent)
// ============================================================================

/// Request body for the `generateContent` endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
pub(crate) struct Content {
    pub parts: Vec<Part>,
}

/// A single content part: either text or inline binary data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InlineData {
    pub mime_type: String,
    pub data: String,
}

/// Structured-output configuration for JSON-constrained calls.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

impl GenerationConfig {
    /// JSON object schema for the evaluation contract.
    pub fn evaluation_schema() -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: json!({
                "type": "OBJECT",
                "properties": {
                    "credits": { "type": "NUMBER" },
                    "impactSummary": { "type": "STRING" },
                    "verificationChecklist": {
                        "type": "ARRAY",
                        "items": { "type": "STRING" }
                    }
                },
                "required": ["credits", "impactSummary", "verificationChecklist"]
            }),
        }
    }

    /// JSON array-of-string schema for the feedback tag contract.
    pub fn tags_schema() -> Self {
        Self {
            response_mime_type: "application/json".to_string(),
            response_schema: json!({
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }),
        }
    }
}

/// Response body from the `generateContent` endpoint.
///
/// Only the fields the gateway reads are modeled; the service returns more.
#[derive(Debug, Deserialize)]
pub(crate) struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Candidate {
    pub content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CandidatePart {
    pub text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate's parts, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_camel_case() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::text("描述"),
                    Part::inline_data("image/jpeg", "aGVsbG8="),
                ],
            }],
            generation_config: Some(GenerationConfig::evaluation_schema()),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert!(value["generationConfig"]["responseSchema"]["properties"]["impactSummary"]
            .is_object());
        assert_eq!(
            value["contents"][0]["parts"][1]["inlineData"]["mimeType"],
            "image/jpeg"
        );
        // Text part must not carry a null inlineData field.
        assert!(value["contents"][0]["parts"][0].get("inlineData").is_none());
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let body = r#"{
            "candidates": [
                { "content": { "parts": [ { "text": "第一" }, { "text": "第二" } ] } }
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.text().as_deref(), Some("第一第二"));
    }

    #[test]
    fn test_response_text_none_when_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_evaluation_round_trips() {
        let json = r#"{"credits":75,"impactSummary":"幫助三位需要視力矯正的人","verificationChecklist":["檢查鏡框","確認度數"]}"#;
        let evaluation: GlassesEvaluation = serde_json::from_str(json).unwrap();
        assert_eq!(evaluation.credits, 75);
        assert_eq!(evaluation.verification_checklist.len(), 2);

        let back = serde_json::to_string(&evaluation).unwrap();
        let again: GlassesEvaluation = serde_json::from_str(&back).unwrap();
        assert_eq!(evaluation, again);
    }
}

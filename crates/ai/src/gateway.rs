//! Gateway abstraction over the generative-language service.
//!
//! The trait decouples the workflows from the concrete provider, allowing
//! tests to run against fake gateways with no network access.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::AiError;
use crate::types::{GlassesEvaluation, ImageAttachment};

// ============================================================================
// Gateway Trait
// ============================================================================

/// The three round trips the exchange makes to the generative service.
///
/// Each call is a single attempt: no retry, no timeout, no backoff. Failures
/// surface as [`AiError`] for the caller's workflow boundary to handle.
#[async_trait]
pub trait AiGateway: Send + Sync {
    /// Score a donated pair of glasses and produce a localized impact
    /// summary and verification checklist.
    async fn evaluate_glasses(
        &self,
        description: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<GlassesEvaluation, AiError>;

    /// Free-form travel advice for a stay's location. No schema constraint.
    async fn generate_travel_advice(&self, location: &str) -> Result<String, AiError>;

    /// Extract 3 short community-value tags from a review comment.
    async fn summarize_feedback(&self, comment: &str) -> Result<Vec<String>, AiError>;
}

// ============================================================================
// Fake Gateway for Testing
// ============================================================================

/// Scripted response for one [`FakeAiGateway`] call.
#[derive(Debug, Clone)]
pub enum FakeResponse {
    Evaluation(GlassesEvaluation),
    Advice(String),
    Tags(Vec<String>),
    Failure(String),
}

/// A fake gateway that replays scripted responses, in order, with no
/// network access.
///
/// When the queue is empty, calls fall back to fixed defaults so tests that
/// don't care about a particular round trip don't have to script it.
pub struct FakeAiGateway {
    responses: Mutex<VecDeque<FakeResponse>>,
}

impl FakeAiGateway {
    /// Create a fake gateway with an empty script (defaults only).
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
        }
    }

    /// Create a fake gateway from a scripted response sequence.
    pub fn with_responses(responses: Vec<FakeResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
        }
    }

    /// A fake gateway whose every call fails with the given message.
    pub fn failing(message: &str) -> Self {
        Self::with_responses(vec![
            FakeResponse::Failure(message.to_string()),
            FakeResponse::Failure(message.to_string()),
            FakeResponse::Failure(message.to_string()),
        ])
    }

    fn next(&self) -> Option<FakeResponse> {
        self.responses.lock().unwrap().pop_front()
    }
}

impl Default for FakeAiGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AiGateway for FakeAiGateway {
    async fn evaluate_glasses(
        &self,
        _description: &str,
        _image: Option<&ImageAttachment>,
    ) -> Result<GlassesEvaluation, AiError> {
        match self.next() {
            Some(FakeResponse::Evaluation(evaluation)) => Ok(evaluation),
            Some(FakeResponse::Failure(message)) => Err(AiError::provider(message)),
            Some(other) => Err(AiError::invalid_response(format!(
                "scripted response mismatch: {:?}",
                other
            ))),
            None => Ok(GlassesEvaluation {
                credits: 50,
                impact_summary: "這副眼鏡能幫助一位需要視力矯正的人。".to_string(),
                verification_checklist: vec![
                    "檢查鏡框完整性".to_string(),
                    "確認鏡片度數".to_string(),
                ],
            }),
        }
    }

    async fn generate_travel_advice(&self, location: &str) -> Result<String, AiError> {
        match self.next() {
            Some(FakeResponse::Advice(advice)) => Ok(advice),
            Some(FakeResponse::Failure(message)) => Err(AiError::provider(message)),
            Some(other) => Err(AiError::invalid_response(format!(
                "scripted response mismatch: {:?}",
                other
            ))),
            None => Ok(format!("{} 的三個旅行建議。", location)),
        }
    }

    async fn summarize_feedback(&self, _comment: &str) -> Result<Vec<String>, AiError> {
        match self.next() {
            Some(FakeResponse::Tags(tags)) => Ok(tags),
            Some(FakeResponse::Failure(message)) => Err(AiError::provider(message)),
            Some(other) => Err(AiError::invalid_response(format!(
                "scripted response mismatch: {:?}",
                other
            ))),
            None => Ok(vec![
                "寧靜".to_string(),
                "永續生活".to_string(),
                "房東熱情".to_string(),
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fake_gateway_replays_script_in_order() {
        let gateway = FakeAiGateway::with_responses(vec![
            FakeResponse::Evaluation(GlassesEvaluation {
                credits: 75,
                impact_summary: "影響力".to_string(),
                verification_checklist: vec!["檢查".to_string()],
            }),
            FakeResponse::Tags(vec!["寧靜".to_string()]),
        ]);

        let evaluation = gateway.evaluate_glasses("黑色鏡框", None).await.unwrap();
        assert_eq!(evaluation.credits, 75);

        let tags = gateway.summarize_feedback("很棒").await.unwrap();
        assert_eq!(tags, vec!["寧靜"]);
    }

    #[tokio::test]
    async fn test_failing_gateway_rejects_every_call() {
        let gateway = FakeAiGateway::failing("service unavailable");
        assert!(gateway.evaluate_glasses("鏡框", None).await.is_err());
        assert!(gateway.generate_travel_advice("京都").await.is_err());
        assert!(gateway.summarize_feedback("評論").await.is_err());
    }

    #[tokio::test]
    async fn test_empty_script_uses_defaults() {
        let gateway = FakeAiGateway::new();
        let tags = gateway.summarize_feedback("評論").await.unwrap();
        assert_eq!(tags.len(), 3);
    }
}

//! Gemini implementation of the gateway.
//!
//! Talks to the Google Generative Language REST API via the
//! `generateContent` endpoint. The evaluation and feedback calls declare a
//! JSON response schema and parse the candidate text; the advice call is
//! unconstrained free text.
//!
//! Every operation is a single attempt. There is deliberately no retry,
//! timeout, or backoff: a failed or hung request surfaces directly to the
//! workflow boundary.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use crate::error::AiError;
use crate::types::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    GlassesEvaluation, ImageAttachment, Part,
};
use crate::AiGateway;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Model used for all three operations.
pub const GEMINI_MODEL: &str = "gemini-3-flash-preview";

/// Environment variable holding the service credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gateway backed by the Gemini `generateContent` API.
pub struct GeminiGateway {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiGateway {
    /// Create a gateway with an explicit API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Create a gateway from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self, AiError> {
        let api_key = std::env::var(API_KEY_ENV)
            .map_err(|_| AiError::MissingApiKey(API_KEY_ENV.to_string()))?;
        Ok(Self::new(api_key))
    }

    /// Override the service base URL (used by tests against a local server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// POST one `generateContent` request and return the candidate text.
    async fn generate(&self, request: GenerateContentRequest) -> Result<String, AiError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, GEMINI_MODEL
        );
        debug!("Calling Gemini generateContent ({})", GEMINI_MODEL);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::provider(format!(
                "generateContent returned {}: {}",
                status, body
            )));
        }

        let body: GenerateContentResponse = response.json().await?;
        body.text()
            .ok_or_else(|| AiError::invalid_response("response contained no candidate text"))
    }
}

#[async_trait]
impl AiGateway for GeminiGateway {
    async fn evaluate_glasses(
        &self,
        description: &str,
        image: Option<&ImageAttachment>,
    ) -> Result<GlassesEvaluation, AiError> {
        let prompt = format!(
            "請分析以下捐贈的舊眼鏡。\n\
             描述：{}\n\
             根據潛在的社會影響力（幫助需要視力矯正的人）計算一個「時間幣 (Time Credit)」價值。\n\
             請以 JSON 格式返回結果，包含以下屬性：\n\
             'credits' (數字 10-100), \n\
             'impactSummary' (字串，請用繁體中文說明影響力), \n\
             'verificationChecklist' (字串陣列，請用繁體中文列出查驗清單)。",
            description
        );

        let mut parts = vec![Part::text(prompt)];
        if let Some(image) = image {
            parts.push(Part::inline_data(&image.mime_type, &image.data));
        }

        let text = self
            .generate(GenerateContentRequest {
                contents: vec![Content { parts }],
                generation_config: Some(GenerationConfig::evaluation_schema()),
            })
            .await?;

        let evaluation: GlassesEvaluation = serde_json::from_str(&text)?;
        Ok(evaluation)
    }

    async fn generate_travel_advice(&self, location: &str) -> Result<String, AiError> {
        let prompt = format!(
            "請針對在 {} 的住宿，為重視社區與永續發展的「時間銀行」會員提供 3 個簡短的旅行建議。請使用繁體中文。",
            location
        );

        self.generate(GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part::text(prompt)],
            }],
            generation_config: None,
        })
        .await
    }

    async fn summarize_feedback(&self, comment: &str) -> Result<Vec<String>, AiError> {
        let prompt = format!(
            "請分析這段旅客評論，並提取 3 個關於住宿體驗的核心標籤（例如：寧靜、永續生活、房東熱情）。評論內容：{}。請以 JSON 陣列格式返回三個標籤字串。",
            comment
        );

        let text = self
            .generate(GenerateContentRequest {
                contents: vec![Content {
                    parts: vec![Part::text(prompt)],
                }],
                generation_config: Some(GenerationConfig::tags_schema()),
            })
            .await?;

        let tags: Vec<String> = serde_json::from_str(&text)?;
        Ok(tags)
    }
}

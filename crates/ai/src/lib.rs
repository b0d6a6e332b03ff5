//! ZenTime AI - Gemini gateway for the exchange.
//!
//! This crate wraps the three round trips the exchange makes against the
//! Google Generative Language service:
//!
//! - `evaluate_glasses`: score a donation 10–100 and produce a localized
//!   impact summary and verification checklist (JSON-constrained)
//! - `generate_travel_advice`: free-text travel tips for a stay's location
//! - `summarize_feedback`: extract 3 community-value tags from a review
//!   comment (JSON-constrained)
//!
//! # Architecture
//!
//! - `gateway`: the [`AiGateway`] trait and the [`FakeAiGateway`] test double
//! - `gemini`: production implementation over the `generateContent` REST API
//! - `types`: contract types and wire DTOs
//! - `error`: gateway error taxonomy
//!
//! # Example
//!
//! ```ignore
//! use zentime_ai::{AiGateway, GeminiGateway};
//!
//! let gateway = GeminiGateway::from_env()?;
//! let evaluation = gateway.evaluate_glasses("黑色雷朋鏡框，-2.50 度數", None).await?;
//! println!("{} ZT: {}", evaluation.credits, evaluation.impact_summary);
//! ```

pub mod error;
pub mod gateway;
pub mod gemini;
pub mod types;

// Re-export main types for convenience
pub use error::AiError;
pub use gateway::{AiGateway, FakeAiGateway, FakeResponse};
pub use gemini::{GeminiGateway, API_KEY_ENV, GEMINI_MODEL};
pub use types::{GlassesEvaluation, ImageAttachment};

pub mod groq;
pub mod types;

pub use groq::GroqClient;
pub use types::ChatResponse;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Analysis request failed: {0}")]
    Request(String),

    #[error("Failed to decode analysis response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Seam for the hosted completion endpoint, so the driver can be exercised
/// with a scripted client instead of a live API.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Submit one file's diff text for critique and return the decoded
    /// response. The response schema is not validated here; missing fields
    /// are the presenter's concern.
    async fn critique(&self, filename: &str, text: &str) -> Result<ChatResponse, AnalysisError>;
}

/// Decode a chat-completions response body. A body that is not well-formed
/// JSON yields AnalysisError::Decode.
pub(crate) fn decode_response(body: &str) -> Result<ChatResponse, AnalysisError> {
    Ok(serde_json::from_str(body)?)
}

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, error, instrument};

use super::types::{ChatMessage, ChatRequest, ChatResponse};
use super::{decode_response, AnalysisError, CompletionClient};

/// Client for Groq's OpenAI-compatible chat-completions API.
pub struct GroqClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GroqClient {
    /// Build a client with a bounded request timeout so a stalled endpoint
    /// cannot hang the run indefinitely.
    pub fn new(api_key: String, model: String, base_url: String) -> Result<Self, AnalysisError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|err| AnalysisError::Request(err.to_string()))?;

        Ok(Self {
            client,
            api_key,
            model,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    #[instrument(skip(self, text), fields(file = %filename, model = %self.model))]
    async fn critique(&self, filename: &str, text: &str) -> Result<ChatResponse, AnalysisError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: build_prompt(filename, text),
            }],
            temperature: 0.7,
            max_tokens: 2000,
        };

        debug!("sending chat completion request");
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, "chat completion request failed");
                AnalysisError::Request(err.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|err| AnalysisError::Request(err.to_string()))?;

        if !status.is_success() {
            error!(status = status.as_u16(), body = %body, "chat completion returned an error");
            return Err(AnalysisError::Request(format!(
                "HTTP {}: {}",
                status.as_u16(),
                body
            )));
        }

        debug!(response_bytes = body.len(), "received chat completion");
        decode_response(&body)
    }
}

/// Fixed critique prompt embedding the filename and diff text verbatim.
/// Asks for five categories of findings with line-number references.
fn build_prompt(filename: &str, code: &str) -> String {
    format!(
        r#"Please analyze the following code from file '{filename}' according to these criteria:

1. Syntax and Basic Structure:
   - Check for syntax errors
   - Verify proper spacing around operators
   - Check line length (should be <= 79 characters for Python)
   - Verify correct placement of braces/parentheses/brackets

2. Documentation and Whitespace:
   - Check docstring and comment formatting
   - Verify appropriate empty line usage
   - Check for trailing whitespace

3. Indentation and Code Blocks:
   - Verify consistent indentation (spaces vs tabs)
   - Check proper indentation of code blocks
   - Analyze nested structure indentation
   - Look for mixed indentation issues

4. Symbols and Completeness:
   - Check for missing symbols (parentheses, brackets, commas, colons)
   - Identify unclosed strings or comments
   - Verify proper function definitions

5. Logic and References:
   - Check variable assignments and references
   - Verify correct operator usage
   - Analyze language-specific syntax requirements

Here is the code to analyze:

{code}

Provide us with line numbers of what you think needs to be changed based on the above conditions."#
    )
}

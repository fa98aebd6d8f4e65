//! CompletionClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::http;
use crate::{AiError, Completion, CompletionClient, CompletionParams, Turn};

use super::client::OpenAiClient;

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(
        &self,
        messages: &[Turn],
        params: &CompletionParams,
    ) -> Result<Completion, AiError> {
        let body = self.build_request_body(messages, params);

        debug!(
            model = %params.model,
            temperature = params.temperature,
            messages = messages.len(),
            "chat completion request"
        );

        let response = self
            .http
            .post(self.completions_url())
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()
            .await
            .map_err(http::send_error)?;

        let response = http::check_status(response).await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        self.parse_response(json)
    }
}

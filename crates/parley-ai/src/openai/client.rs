//! OpenAI client struct, request building, and response parsing.

use crate::http;
use crate::{AiError, Completion, CompletionParams, TokenUsage, Turn};

use super::config::OpenAiConfig;

/// OpenAI-compatible chat completion client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, AiError> {
        let http = http::build_client(config.connect_timeout, config.request_timeout)?;
        Ok(Self { config, http })
    }

    pub(crate) fn completions_url(&self) -> String {
        http::endpoint(&self.config.base_url, "chat/completions")
    }

    /// Build the JSON request body for the chat completions API.
    pub(crate) fn build_request_body(
        &self,
        messages: &[Turn],
        params: &CompletionParams,
    ) -> serde_json::Value {
        serde_json::json!({
            "model": params.model,
            "temperature": params.temperature,
            "messages": messages,
        })
    }

    /// Parse a non-streaming response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Completion, AiError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| {
                AiError::ParseError("no 'choices[0].message.content' in response".to_string())
            })?;

        let usage = TokenUsage {
            prompt_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            completion_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Completion { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn client() -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new("sk-test").with_base_url("http://localhost:9/v1/"))
            .unwrap()
    }

    #[test]
    fn request_body_carries_full_transcript() {
        let messages = vec![
            Turn::new(Role::System, "You are a helpful, concise AI assistant."),
            Turn::new(Role::User, "Hi"),
        ];
        let body = client().build_request_body(&messages, &CompletionParams::new("gpt-4o-mini", 0.3));

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["temperature"], 0.3);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["role"], "user");
        assert_eq!(body["messages"][1]["content"], "Hi");
        assert!(body.get("stream").is_none());
    }

    #[test]
    fn completions_url_uses_base() {
        assert_eq!(
            client().completions_url(),
            "http://localhost:9/v1/chat/completions"
        );
    }

    #[test]
    fn parses_reply_and_usage() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "Hello! How can I help?"}}],
            "usage": {"prompt_tokens": 21, "completion_tokens": 7, "total_tokens": 28}
        });
        let completion = client().parse_response(json).unwrap();
        assert_eq!(completion.content, "Hello! How can I help?");
        assert_eq!(completion.usage.prompt_tokens, 21);
        assert_eq!(completion.usage.completion_tokens, 7);
    }

    #[test]
    fn missing_usage_defaults_to_zero() {
        let json = serde_json::json!({
            "choices": [{"message": {"content": "ok"}}]
        });
        let completion = client().parse_response(json).unwrap();
        assert_eq!(completion.usage, TokenUsage::default());
    }

    #[test]
    fn missing_content_is_parse_error() {
        let json = serde_json::json!({"choices": []});
        assert!(matches!(
            client().parse_response(json),
            Err(AiError::ParseError(_))
        ));
    }
}

//! Chat-completions oracle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{AiError, DecisionOracle, OracleConfig};

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    n: u8,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessageResponse,
}

#[derive(Deserialize)]
struct ChatMessageResponse {
    #[serde(default)]
    content: Option<String>,
}

/// Sends the prompt as a single user message and returns the first choice.
pub struct OpenAiOracle {
    client: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    url: String,
}

impl OpenAiOracle {
    pub fn new(config: &OracleConfig) -> Result<Self, AiError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or_else(|| AiError::Config("OPENAI_API_KEY is not set".to_string()))?;
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AiError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            url: config.completions_url(),
        })
    }
}

fn transport_error(e: reqwest::Error) -> AiError {
    if e.is_timeout() {
        AiError::Timeout
    } else {
        AiError::Transport(e.to_string())
    }
}

fn first_content(response: ChatCompletionResponse) -> Result<String, AiError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(AiError::EmptyResponse)
}

#[async_trait]
impl DecisionOracle for OpenAiOracle {
    async fn decide(&self, prompt: &str) -> Result<String, AiError> {
        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            n: 1,
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?
            .error_for_status()
            .map_err(transport_error)?
            .json::<ChatCompletionResponse>()
            .await
            .map_err(transport_error)?;

        let content = first_content(response)?;
        debug!(model = %self.model, response = %content, "oracle_response");
        Ok(content)
    }

    fn name(&self) -> &'static str {
        "openai"
    }
}

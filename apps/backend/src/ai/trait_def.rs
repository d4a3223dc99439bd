//! Decision oracle trait definition.

use std::fmt;

use async_trait::async_trait;

/// Errors that can occur while asking an oracle for a decision.
#[derive(Debug)]
pub enum AiError {
    /// The oracle did not answer within the configured timeout
    Timeout,
    /// Network or HTTP-level failure talking to the oracle
    Transport(String),
    /// The oracle answered without any content
    EmptyResponse,
    /// The oracle cannot be built from the given configuration
    Config(String),
}

impl fmt::Display for AiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AiError::Timeout => write!(f, "Decision oracle timed out"),
            AiError::Transport(msg) => write!(f, "Decision oracle transport error: {msg}"),
            AiError::EmptyResponse => write!(f, "Decision oracle returned an empty response"),
            AiError::Config(msg) => write!(f, "Decision oracle misconfigured: {msg}"),
        }
    }
}

impl std::error::Error for AiError {}

/// Something that reads a decision prompt and answers with one line of text.
///
/// Implementations never see game state directly; the prompt is the whole
/// interface. Parsing the answer is the caller's job.
#[async_trait]
pub trait DecisionOracle: Send + Sync {
    async fn decide(&self, prompt: &str) -> Result<String, AiError>;

    /// Short label for logs.
    fn name(&self) -> &'static str;
}

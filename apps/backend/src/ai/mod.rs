//! Decision oracle: turns a prompt into a line of decision text.
//!
//! - `OpenAiOracle`: chat-completions over HTTP
//! - `ScriptedOracle`: canned responses for tests and dry runs

mod chatgpt;
mod config;
mod scripted;
mod trait_def;

use std::sync::Arc;

pub use chatgpt::OpenAiOracle;
pub use config::{OracleConfig, OracleKind};
pub use scripted::ScriptedOracle;
pub use trait_def::{AiError, DecisionOracle};

/// Build the oracle named by `config.kind`.
pub fn create_oracle(config: &OracleConfig) -> Result<Arc<dyn DecisionOracle>, AiError> {
    match config.kind {
        OracleKind::OpenAi => Ok(Arc::new(OpenAiOracle::new(config)?)),
        OracleKind::Scripted => Ok(Arc::new(ScriptedOracle::new(config.script.clone()))),
    }
}

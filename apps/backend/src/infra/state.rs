use std::sync::Arc;

use crate::ai::{create_oracle, DecisionOracle, OracleConfig, ScriptedOracle};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    database_url: Option<String>,
    oracle: Option<Arc<dyn DecisionOracle>>,
    oracle_config: Option<OracleConfig>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            database_url: None,
            oracle: None,
            oracle_config: None,
        }
    }

    /// Connect to `url` and migrate it during `build`.
    pub fn with_db(mut self, url: impl Into<String>) -> Self {
        self.database_url = Some(url.into());
        self
    }

    /// Use an already-built oracle.
    pub fn with_oracle(mut self, oracle: Arc<dyn DecisionOracle>) -> Self {
        self.oracle = Some(oracle);
        self
    }

    /// Build the oracle from `config` during `build`.
    pub fn with_oracle_config(mut self, config: OracleConfig) -> Self {
        self.oracle_config = Some(config);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let oracle = match (self.oracle, self.oracle_config) {
            (Some(oracle), _) => oracle,
            (None, Some(config)) => create_oracle(&config)?,
            (None, None) => Arc::new(ScriptedOracle::default()),
        };

        match self.database_url {
            Some(url) => {
                let conn = bootstrap_db(&url).await?;
                Ok(AppState::new(conn, oracle))
            }
            None => Ok(AppState::without_db(oracle)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}

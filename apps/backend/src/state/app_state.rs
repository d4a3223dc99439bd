use std::fmt;
use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::ai::{DecisionOracle, ScriptedOracle};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    pub db: Option<DatabaseConnection>,
    /// Oracle consulted by `/advance`
    pub oracle: Arc<dyn DecisionOracle>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, oracle: Arc<dyn DecisionOracle>) -> Self {
        Self {
            db: Some(db),
            oracle,
        }
    }

    /// State without a database; every DB-backed route answers 503.
    pub fn without_db(oracle: Arc<dyn DecisionOracle>) -> Self {
        Self { db: None, oracle }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    /// Test state with a scripted oracle that has nothing to say.
    pub fn for_tests(db: DatabaseConnection) -> Self {
        Self::new(db, Arc::new(ScriptedOracle::default()))
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("oracle", &self.oracle.name())
            .finish()
    }
}

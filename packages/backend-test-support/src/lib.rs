//! Backend test support utilities
//!
//! Throwaway migrated databases, unified logging initialization and
//! problem+json assertions shared by the backend's integration tests.

pub mod db;
pub mod logging;
pub mod problem_details;

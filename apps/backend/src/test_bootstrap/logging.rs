#![cfg(test)]

//! Logging for unit tests. Shares its subscriber setup with the integration
//! tests so `TEST_LOG` behaves the same in both.

pub fn init() {
    backend_test_support::logging::init();
}

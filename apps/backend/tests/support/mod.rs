#![allow(dead_code)]

pub mod app_builder;

pub use app_builder::create_test_app;
pub use factory::{alice_and_bob, seed_table, submit, SeededTable};

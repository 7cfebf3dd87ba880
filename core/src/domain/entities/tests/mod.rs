//! Tests for domain entities

mod user_tests;
mod verification_tests;

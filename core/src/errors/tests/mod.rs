//! Tests for the domain error taxonomy

mod domain_error_tests;

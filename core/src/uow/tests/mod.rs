//! Tests for the unit-of-work contract

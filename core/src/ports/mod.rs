//! Ports: abstract capabilities the use-case services depend on.
//!
//! Each port has exactly one production adapter in `gk_infra` and a fake
//! used by tests. Services only ever see the trait.

pub mod password_hasher;
pub mod token_provider;

pub use password_hasher::PasswordHasher;
pub use token_provider::TokenProvider;

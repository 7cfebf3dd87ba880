//! # Gatekey Core
//!
//! Core business logic and domain layer for the Gatekey identity services.
//! This crate contains domain entities, use-case services, port and
//! repository interfaces, the unit-of-work abstraction, and the error
//! taxonomy that the API boundary maps to protocol responses.

pub mod domain;
pub mod errors;
pub mod ports;
pub mod repositories;
pub mod services;
pub mod uow;

// Re-export commonly used types for convenience
pub use domain::entities::{Claims, NewUser, TokenPair, TokenType, User, UserPatch, Verification};
pub use domain::value_objects::{EmailAddress, UserRole, VerificationChannel};
pub use errors::{DomainError, DomainResult, TokenError};
pub use ports::{PasswordHasher, TokenProvider};
pub use repositories::{UserRepository, VerificationRepository};
pub use services::{AuthService, AuthServiceConfig, UserService};
pub use uow::{InMemoryUnitOfWork, TransactionScope, UnitOfWork};

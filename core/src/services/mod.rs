//! Use-case services orchestrating the domain over the unit of work.

pub mod auth;
pub mod user;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use user::UserService;

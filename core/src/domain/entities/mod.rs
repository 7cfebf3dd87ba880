//! Domain entities representing core business objects.

pub mod token;
pub mod user;
pub mod verification;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use token::{Claims, TokenPair, TokenType};
pub use user::{NewUser, User, UserPatch};
pub use verification::{Verification, CODE_LENGTH};

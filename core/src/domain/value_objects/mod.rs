//! Value objects: immutable types whose validity is defined by their
//! contents rather than identity.

pub mod email_address;
pub mod user_role;
pub mod verification_channel;

pub use email_address::EmailAddress;
pub use user_role::UserRole;
pub use verification_channel::VerificationChannel;

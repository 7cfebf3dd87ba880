//! Repository contracts: the seam the core requires from a storage
//! adapter. Any engine satisfying these interfaces is substitutable.
//!
//! Repositories carry no transaction-control responsibility; that
//! belongs to the [unit of work](crate::uow).

pub mod user;
pub mod verification;

pub use user::UserRepository;
pub use verification::VerificationRepository;

//! User service module
//!
//! Read/update/delete use-cases over user records. Authorization is
//! decided by [`domain::policies`](crate::domain::policies) and enforced
//! by the caller before these methods run.

mod service;

#[cfg(test)]
mod tests;

pub use service::UserService;

//! # Infrastructure Layer
//!
//! Production adapters for the Gatekey core ports:
//! - **Database**: MySQL unit of work and repositories using SQLx
//! - **Security**: bcrypt password hashing and JWT token issuance
//!
//! Every adapter implements a `gk_core` trait; the services never see
//! these concrete types.

pub mod database;
pub mod security;

pub use database::{connect_pool, MySqlUnitOfWork};
pub use security::{BcryptPasswordHasher, JwtTokenProvider};

//! Security module - password hashing and token issuance adapters

mod bcrypt_password_hasher;
mod jwt_token_provider;

pub use bcrypt_password_hasher::BcryptPasswordHasher;
pub use jwt_token_provider::JwtTokenProvider;

#[cfg(test)]
mod tests;

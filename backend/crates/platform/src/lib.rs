//! Platform Services
//!
//! Cross-cutting cryptographic primitives with no domain knowledge:
//! - `password` - Argon2id password hashing and verification
//! - `crypto` - OS randomness and base64 helpers

pub mod crypto;
pub mod password;

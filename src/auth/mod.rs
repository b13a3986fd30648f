//! Stateless bearer-token authentication: Argon2id password hashing and
//! HS256-signed access tokens. No refresh tokens, no persisted sessions -
//! expiry requires re-authentication.

pub mod jwt;
pub mod password;

//! Token service: issuing and verifying access tokens.

pub mod jwt;

pub use jwt::{mint_access_token, verify_access_token, Claims, Identity};

//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, TokenProvider};
pub use password::{
    hash_password, validate_password_strength, verify_or_error, verify_password,
    MIN_PASSWORD_LENGTH,
};

//! 인증 관련 서비스
//!
//! - [`PasswordService`] - bcrypt 해싱과 검증
//! - [`TokenService`] - HS256 JWT 발급과 검증

pub mod password_service;
pub mod token_service;

pub use password_service::PasswordService;
pub use token_service::TokenService;

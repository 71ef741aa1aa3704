//! 에러 타입 모듈
//!
//! [`errors::AppError`]를 애플리케이션 전역 에러로 사용합니다.

pub mod errors;

pub use errors::*;

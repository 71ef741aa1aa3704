//! # Domain Models Module
//!
//! 저장되지 않는 도메인 모델과 값 객체를 정의하는 모듈입니다.
//!
//! ## Entities vs Models 구분
//!
//! ### Entities (`../entities/`)
//! - 데이터베이스에 직접 저장되는 객체
//! - 고유한 식별자(ID)를 가짐
//!
//! ### Models (`./`)
//! - 요청 처리 동안만 존재하는 값 객체
//! - [`auth::authenticated_user::AuthenticatedUser`]: 미들웨어가 검증한 요청 주체
//! - [`token::token::TokenClaims`]: JWT 페이로드

pub mod auth;
pub mod token;

pub use auth::*;
pub use token::*;

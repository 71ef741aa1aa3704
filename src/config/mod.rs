//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 패스워드 해싱 설정
//! - [`auth_config`] - JWT, 이미지 호스트 자격 증명 설정
//!
//! ## 설계 원칙
//!
//! - 민감한 정보(JWT 서명 키, Cloudinary 시크릿)는 환경 변수로만 제공
//! - 서명 키에는 기본값이 없으며 누락 시 서버가 시작되지 않음
//! - 설정값은 `main`에서 한 번 읽어 서비스 생성 시 주입
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{ServerConfig, JwtConfig};
//!
//! let bind = (ServerConfig::host(), ServerConfig::port());
//! let secret = JwtConfig::secret()?;
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

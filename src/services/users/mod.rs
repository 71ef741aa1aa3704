//! 사용자 관리 서비스 모듈
//!
//! 회원가입, 로그인, 내 정보 조회를 담당합니다.
//!
//! ```rust,ignore
//! let user_service = UserService::new(user_repo, passwords, tokens);
//! let response = user_service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::UserService;

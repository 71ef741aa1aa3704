//! 미들웨어 모듈
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 토큰 추출 및 검증
//! - 사용자 정보를 request extension에 저장
//! - 실패 시 401, 핸들러는 호출되지 않음
//!
//! 보호가 필요한 핸들러에만 개별적으로 붙입니다.
//!
//! ```rust,ignore
//! #[post("/", wrap = "AuthMiddleware::required()")]
//! async fn create_car(user: AuthenticatedUser, ...) -> Result<HttpResponse, AppError> { ... }
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;

//! # 사용자 관련 응답 DTO 모듈
//!
//! 엔티티를 클라이언트에게 노출 가능한 형태로 투영합니다.
//!
//! ```json
//! { "id": "507f1f77bcf86cd799439011", "username": "alice" }
//! ```
//!
//! ```json
//! { "token": "eyJhbGciOiJIUzI1NiIs...", "username": "alice" }
//! ```

pub mod user_response;

pub use user_response::{UserResponse, LoginResponse};

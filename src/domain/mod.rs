//! # Domain Layer Module
//!
//! ```text
//! domain/
//! ├── entities   - MongoDB에 저장되는 User, Car
//! ├── dto        - HTTP 요청/응답 타입
//! └── models     - 토큰 클레임, 인증된 사용자 정보
//! ```
//!
//! 엔티티는 저장 형태 그대로 두고, 클라이언트에게는 항상 DTO로 투영해서 내보냅니다.
//! 비밀번호 해시는 어떤 응답 DTO에도 포함되지 않습니다.

pub mod entities;
pub mod dto;
pub mod models;

pub use entities::*;
pub use dto::*;
pub use models::*;

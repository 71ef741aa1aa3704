//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 요청/응답 타입입니다.
//! 엔티티를 그대로 노출하지 않고, 요청 검증은 `validator` 크레이트로 수행합니다.
//!
//! ```text
//! dto/
//! ├── users/   # 회원가입, 로그인, 내 정보
//! └── cars/    # 매물 등록, 조회, 수정
//! ```

pub mod users;
pub mod cars;

pub use users::*;
pub use cars::*;

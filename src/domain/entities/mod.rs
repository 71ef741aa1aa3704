//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 대응되는 문서 구조를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (users, cars 컬렉션 문서)
//! ├── models/       ← 인증 컨텍스트 및 토큰 클레임
//! └── dto/          ← 요청/응답 객체
//! ```
//!
//! 엔티티는 저장 전용 타입입니다. 클라이언트 응답에는 항상 `dto`의
//! 응답 타입으로 변환해서 사용합니다 (비밀번호 해시 노출 방지).
//!
//! | 엔티티 | 컬렉션 | 인덱스 |
//! |--------|--------|--------|
//! | `User` | `users` | `username` (unique) |
//! | `Car`  | `cars`  | `created_at` desc, `_id` desc |

pub mod users;
pub mod cars;

pub use users::*;
pub use cars::*;

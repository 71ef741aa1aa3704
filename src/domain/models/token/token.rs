//! JWT 인증 토큰 클레임
//!
//! RFC 7519 표준 클레임(`sub`, `iat`, `exp`)과 사용자 이름을 담습니다.
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// - `sub`: 토큰의 주체 (사용자 ID)
/// - `username`: 발급 시점의 사용자 이름
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp, `iat` + 2시간)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

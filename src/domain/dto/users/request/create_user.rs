//! 회원가입 요청 DTO
//!
//! 새로운 사용자 계정 생성을 위한 HTTP 요청 데이터 구조를 정의합니다.
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 회원가입 요청
///
/// ```json
/// { "username": "alice", "password": "secret123" }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// 사용자명 (3-15자, 대소문자 구분)
    #[validate(length(
        min = 3,
        max = 15,
        message = "사용자명은 3-15자 사이여야 합니다"
    ))]
    pub username: String,

    /// 계정 비밀번호 (해싱 후 저장)
    #[validate(length(min = 1, message = "비밀번호를 입력해주세요"))]
    pub password: String,
}

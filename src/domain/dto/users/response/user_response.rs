use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
///
/// 회원가입과 `/users/me` 응답에 공통으로 사용합니다.
/// 비밀번호 해시는 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User { id, username, .. } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
        }
    }
}

/// 로그인 응답 DTO (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

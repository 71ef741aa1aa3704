//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 매핑됩니다.
/// 비밀번호 해시를 포함하므로 클라이언트 응답에 직접 사용하지 않고
/// 반드시 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름 (unique, 대소문자 구분)
    pub username: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID는 저장 시점에 MongoDB가 할당합니다.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            id: None,
            username,
            password_hash,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

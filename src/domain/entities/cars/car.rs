//! Car Entity Implementation

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 매물 자동차 엔티티
///
/// `cars` 컬렉션의 문서와 1:1로 매핑됩니다.
/// `user_id`는 소유자 [`User`](crate::domain::entities::users::user::User)의 ID 문자열이며
/// 조인 없이 애플리케이션 수준에서만 관리됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 제조사 (타이틀 케이스)
    pub brand: String,
    /// 모델명 (타이틀 케이스)
    pub make: String,
    /// 연식 (1971-2024)
    pub year: i32,
    /// 배기량 cm³ (1-4999)
    pub cm3: i32,
    /// 주행거리 km (1-499999)
    pub km: i32,
    /// 가격 (1-99999)
    pub price: i32,
    /// 소유자 사용자 ID (ObjectId 16진수 문자열)
    pub user_id: String,
    /// 업로드된 이미지 URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_url: Option<String>,
    /// 생성 시간 (목록 정렬 기준)
    pub created_at: DateTime,
}

impl Car {
    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 주어진 사용자가 소유자인지 확인
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

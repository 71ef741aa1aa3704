use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::cars::car::Car;

/// 매물 응답 DTO
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarResponse {
    pub id: String,
    pub brand: String,
    pub make: String,
    pub year: i32,
    pub cm3: i32,
    pub km: i32,
    pub price: i32,
    pub user_id: String,
    pub picture_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarResponse {
    fn from(car: Car) -> Self {
        let created_at = DateTime::<Utc>::from_timestamp_millis(car.created_at.timestamp_millis())
            .unwrap_or_default();

        Self {
            id: car.id.map(|id| id.to_hex()).unwrap_or_default(),
            brand: car.brand,
            make: car.make,
            year: car.year,
            cm3: car.cm3,
            km: car.km,
            price: car.price,
            user_id: car.user_id,
            picture_url: car.picture_url,
            created_at,
        }
    }
}

/// 매물 목록 응답
///
/// `has_more`가 true면 다음 페이지에 매물이 더 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarListResponse {
    pub cars: Vec<CarResponse>,
    pub page: u64,
    pub has_more: bool,
}

//! 자동차 매물 요청 DTO
//!
//! 범위 제약은 모두 양 끝을 포함합니다.
//!
//! | 필드 | 범위 |
//! |------|------|
//! | `year` | 1971 - 2024 |
//! | `cm3` | 1 - 4999 |
//! | `km` | 1 - 499999 |
//! | `price` | 1 - 99999 |
use serde::Deserialize;
use validator::{Validate, ValidationError};

pub const MIN_YEAR: i32 = 1971;
pub const MAX_YEAR: i32 = 2024;
pub const MAX_CM3: i32 = 4999;
pub const MAX_KM: i32 = 499_999;
pub const MAX_PRICE: i32 = 99_999;
/// 조회 가능한 마지막 페이지
pub const MAX_PAGE: u64 = 1_000_000;

/// 매물 등록 요청
///
/// multipart 폼 필드(`brand`, `make`, `year`, `cm3`, `km`, `price`)에서 만들어집니다.
/// 이미지 파트는 별도로 [`CarPicture`]로 전달됩니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub brand: String,

    #[validate(custom(function = "validate_not_blank"))]
    pub make: String,

    #[validate(range(min = MIN_YEAR, max = MAX_YEAR, message = "연식은 1971-2024 사이여야 합니다"))]
    pub year: i32,

    #[validate(range(min = 1, max = MAX_CM3, message = "배기량은 1-4999 사이여야 합니다"))]
    pub cm3: i32,

    #[validate(range(min = 1, max = MAX_KM, message = "주행거리는 1-499999 사이여야 합니다"))]
    pub km: i32,

    #[validate(range(min = 1, max = MAX_PRICE, message = "가격은 1-99999 사이여야 합니다"))]
    pub price: i32,
}

/// 매물 수정 요청
///
/// 전달된 필드만 변경합니다. 최소 한 개의 필드가 필요합니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_has_changes"))]
pub struct UpdateCarRequest {
    #[validate(custom(function = "validate_not_blank"))]
    pub brand: Option<String>,

    #[validate(custom(function = "validate_not_blank"))]
    pub make: Option<String>,

    #[validate(range(min = MIN_YEAR, max = MAX_YEAR, message = "연식은 1971-2024 사이여야 합니다"))]
    pub year: Option<i32>,

    #[validate(range(min = 1, max = MAX_CM3, message = "배기량은 1-4999 사이여야 합니다"))]
    pub cm3: Option<i32>,

    #[validate(range(min = 1, max = MAX_KM, message = "주행거리는 1-499999 사이여야 합니다"))]
    pub km: Option<i32>,

    #[validate(range(min = 1, max = MAX_PRICE, message = "가격은 1-99999 사이여야 합니다"))]
    pub price: Option<i32>,
}

impl UpdateCarRequest {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none()
            && self.make.is_none()
            && self.year.is_none()
            && self.cm3.is_none()
            && self.km.is_none()
            && self.price.is_none()
    }
}

/// 매물 목록 조회 쿼리 (`?page=N`, 1부터 시작)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CarListQuery {
    #[validate(range(min = 1, max = MAX_PAGE, message = "page는 1-1000000 사이여야 합니다"))]
    pub page: Option<u64>,
}

impl CarListQuery {
    pub fn page(&self) -> u64 {
        self.page.unwrap_or(1)
    }
}

/// 업로드할 매물 이미지
#[derive(Debug, Clone)]
pub struct CarPicture {
    pub bytes: Vec<u8>,
    pub file_name: Option<String>,
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message("빈 값은 허용되지 않습니다".into()));
    }
    Ok(())
}

fn validate_has_changes(req: &UpdateCarRequest) -> Result<(), ValidationError> {
    if req.is_empty() {
        return Err(ValidationError::new("empty_update")
            .with_message("변경할 필드가 없습니다".into()));
    }
    Ok(())
}

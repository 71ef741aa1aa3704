//! # 매물 서비스 구현
//!
//! 매물 등록, 목록/단건 조회, 소유자 전용 수정/삭제를 담당합니다.
//!
//! 등록 순서: 입력 검증 → 이미지 업로드 → 제조사/모델명 타이틀 케이스 → 저장.
//! 검증에 실패한 요청은 이미지 호스트를 호출하지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use mongodb::bson::DateTime;
use validator::Validate;

use crate::{
    domain::{
        dto::cars::{
            request::{CarListQuery, CarPicture, CreateCarRequest, UpdateCarRequest},
            response::{CarListResponse, CarResponse},
        },
        entities::cars::car::Car,
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::errors::AppError,
    repositories::cars::car_repo::CarRepository,
    services::images::ImageHost,
    utils::string_utils::title_case,
};

/// 페이지당 매물 수
pub const CARS_PER_PAGE: u64 = 10;

fn not_found() -> AppError {
    AppError::NotFound("매물을 찾을 수 없습니다".to_string())
}

pub struct CarService {
    car_repo: Arc<dyn CarRepository>,
    images: Arc<dyn ImageHost>,
}

impl CarService {
    pub fn new(car_repo: Arc<dyn CarRepository>, images: Arc<dyn ImageHost>) -> Self {
        Self { car_repo, images }
    }

    /// 매물 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 범위를 벗어난 필드 (필드명 포함)
    /// * `AppError::UploadError` - 이미지 호스트 실패
    pub async fn create_car(
        &self,
        owner: &AuthenticatedUser,
        request: CreateCarRequest,
        picture: CarPicture,
    ) -> Result<CarResponse, AppError> {
        request.validate()?;

        let picture_url = self.images.upload(picture.bytes, picture.file_name).await?;

        let car = Car {
            id: None,
            brand: title_case(request.brand.trim()),
            make: title_case(request.make.trim()),
            year: request.year,
            cm3: request.cm3,
            km: request.km,
            price: request.price,
            user_id: owner.user_id.clone(),
            picture_url: Some(picture_url),
            created_at: DateTime::now(),
        };

        let saved = self.car_repo.create(car).await?;
        info!(
            "매물 등록: {} {} ({}) by {}",
            saved.brand,
            saved.make,
            saved.id_string().unwrap_or_default(),
            owner.username
        );

        Ok(CarResponse::from(saved))
    }

    /// 최신순 매물 목록 (1부터 시작하는 페이지)
    pub async fn list_cars(&self, query: CarListQuery) -> Result<CarListResponse, AppError> {
        query.validate()?;
        let page = query.page();

        let skip = (page - 1).saturating_mul(CARS_PER_PAGE);
        let mut cars = self.car_repo
            .list(skip, (CARS_PER_PAGE + 1) as i64)
            .await?;

        let has_more = cars.len() as u64 > CARS_PER_PAGE;
        cars.truncate(CARS_PER_PAGE as usize);

        Ok(CarListResponse {
            cars: cars.into_iter().map(CarResponse::from).collect(),
            page,
            has_more,
        })
    }

    /// 단건 조회
    ///
    /// 잘못된 형식의 ID와 존재하지 않는 ID는 모두 `NotFound`입니다.
    pub async fn get_car(&self, id: &str) -> Result<CarResponse, AppError> {
        self.car_repo
            .find_by_id(id)
            .await?
            .map(CarResponse::from)
            .ok_or_else(not_found)
    }

    /// 소유자 확인 후 매물 반환
    async fn owned_car(&self, owner: &AuthenticatedUser, id: &str) -> Result<Car, AppError> {
        let car = self.car_repo.find_by_id(id).await?.ok_or_else(not_found)?;

        if !car.is_owned_by(&owner.user_id) {
            warn!("매물 {}에 대한 권한 없는 접근: {}", id, owner.username);
            return Err(AppError::AuthorizationError(
                "본인의 매물만 변경할 수 있습니다".to_string(),
            ));
        }

        Ok(car)
    }

    /// 매물 수정 (소유자 전용)
    pub async fn update_car(
        &self,
        owner: &AuthenticatedUser,
        id: &str,
        mut changes: UpdateCarRequest,
    ) -> Result<CarResponse, AppError> {
        changes.validate()?;
        self.owned_car(owner, id).await?;

        changes.brand = changes.brand.map(|b| title_case(b.trim()));
        changes.make = changes.make.map(|m| title_case(m.trim()));

        let updated = self.car_repo.update(id, changes).await?.ok_or_else(not_found)?;
        info!("매물 수정: {} by {}", id, owner.username);

        Ok(CarResponse::from(updated))
    }

    /// 매물 삭제 (소유자 전용)
    pub async fn delete_car(&self, owner: &AuthenticatedUser, id: &str) -> Result<(), AppError> {
        self.owned_car(owner, id).await?;

        if !self.car_repo.delete(id).await? {
            return Err(not_found());
        }

        info!("매물 삭제: {} by {}", id, owner.username);
        Ok(())
    }
}

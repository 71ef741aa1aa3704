//! # 자동차 매물 리포지토리
//!
//! `cars` 컬렉션에 대한 CRUD를 담당합니다.
//! 목록은 `created_at` 내림차순, 동시각이면 `_id` 내림차순으로 정렬되어
//! 페이지 경계가 요청마다 흔들리지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::info;
use mongodb::{
    bson::{doc, oid::ObjectId, Document},
    options::{IndexOptions, ReturnDocument},
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::{dto::cars::request::UpdateCarRequest, entities::cars::car::Car},
    errors::errors::AppError,
};

const COLLECTION_NAME: &str = "cars";

/// 매물 저장소 인터페이스
///
/// ID 인자가 ObjectId 형식이 아니면 "없음"과 동일하게 처리합니다.
#[async_trait]
pub trait CarRepository: Send + Sync {
    async fn create(&self, car: Car) -> Result<Car, AppError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Car>, AppError>;

    /// 최신순으로 `skip`개를 건너뛰고 최대 `limit`개 반환
    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<Car>, AppError>;

    /// 전달된 필드만 변경하고 변경 후 문서를 반환
    async fn update(&self, id: &str, changes: UpdateCarRequest) -> Result<Option<Car>, AppError>;

    /// 삭제 여부 반환
    async fn delete(&self, id: &str) -> Result<bool, AppError>;

    async fn create_indexes(&self) -> Result<(), AppError>;
}

/// 변경 요청을 `$set` 문서로 변환
fn to_set_document(changes: UpdateCarRequest) -> Document {
    let mut set = Document::new();
    if let Some(brand) = changes.brand {
        set.insert("brand", brand);
    }
    if let Some(make) = changes.make {
        set.insert("make", make);
    }
    if let Some(year) = changes.year {
        set.insert("year", year);
    }
    if let Some(cm3) = changes.cm3 {
        set.insert("cm3", cm3);
    }
    if let Some(km) = changes.km {
        set.insert("km", km);
    }
    if let Some(price) = changes.price {
        set.insert("price", price);
    }
    set
}

/// MongoDB 기반 [`CarRepository`]
pub struct MongoCarRepository {
    db: Arc<Database>,
}

impl MongoCarRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Car> {
        self.db.get_database().collection::<Car>(COLLECTION_NAME)
    }
}

#[async_trait]
impl CarRepository for MongoCarRepository {
    async fn create(&self, mut car: Car) -> Result<Car, AppError> {
        let result = self.collection()
            .insert_one(&car)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        car.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?);

        Ok(car)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Car>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<Car>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .sort(doc! { "created_at": -1, "_id": -1 })
            .skip(skip)
            .limit(limit)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn update(&self, id: &str, changes: UpdateCarRequest) -> Result<Option<Car>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        let set = to_set_document(changes);
        if set.is_empty() {
            return self.find_by_id(id).await;
        }

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(false);
        };

        let result = self.collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        let listing_index = IndexModel::builder()
            .keys(doc! { "created_at": -1, "_id": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        let owner_index = IndexModel::builder()
            .keys(doc! { "user_id": 1 })
            .options(IndexOptions::builder()
                .name("user_id".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([listing_index, owner_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("cars 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//! 사용자명 중복은 유니크 인덱스로 보장하며, 선조회 없이 insert 결과로 판단합니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::{doc, oid::ObjectId},
    error::Error as MongoError,
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::user::User,
    errors::errors::AppError,
    repositories::is_duplicate_key_error,
};

const COLLECTION_NAME: &str = "users";

/// 사용자 저장소 인터페이스
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 새 사용자 저장
    ///
    /// * `Ok(User)` - ID가 할당된 사용자
    /// * `Err(AppError::ConflictError)` - 사용자명 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    async fn create(&self, user: User) -> Result<User, AppError>;

    /// 사용자명으로 조회 (대소문자 구분)
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// ID로 조회
    ///
    /// ObjectId 형식이 아닌 ID는 에러가 아니라 `Ok(None)`입니다.
    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError>;

    /// 인덱스 생성 (기동 시 1회)
    async fn create_indexes(&self) -> Result<(), AppError>;
}

/// MongoDB 기반 [`UserRepository`]
pub struct MongoUserRepository {
    db: Arc<Database>,
}

impl MongoUserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(COLLECTION_NAME)
    }
}

/// insert 실패 변환 (유니크 인덱스 위반은 `ConflictError`)
fn insert_error(err: MongoError) -> AppError {
    if is_duplicate_key_error(&err) {
        AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
    } else {
        AppError::DatabaseError(err.to_string())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(insert_error)?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("삽입된 문서의 ID가 ObjectId가 아닙니다".to_string())
        })?;
        user.id = Some(id);

        debug!("사용자 생성: {} ({})", user.username, id.to_hex());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(username_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("users 컬렉션 인덱스 준비 완료");
        Ok(())
    }
}

//! 테스트용 인메모리 사용자 저장소

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::user_repo::UserRepository;
use crate::{domain::entities::users::user::User, errors::errors::AppError};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let Ok(object_id) = ObjectId::parse_str(id) else {
            return Ok(None);
        };
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == Some(object_id)).cloned())
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }
}

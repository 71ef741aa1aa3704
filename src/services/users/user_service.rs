//! # 사용자 서비스 구현
//!
//! 회원가입, 로그인, 내 정보 조회를 담당합니다.
//!
//! ```text
//! UserService
//! ├── register  입력 검증 → 해싱 → 저장 (유니크 인덱스로 중복 판정)
//! ├── login     조회 → 검증 (미존재 시 더미 검증) → 토큰 발급
//! └── me        토큰의 사용자 ID로 재조회
//! ```
//!
//! 로그인 실패는 사용자 미존재와 비밀번호 불일치를 구분하지 않습니다.

use std::sync::Arc;

use log::{info, warn};
use validator::Validate;

use crate::{
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest},
            response::{LoginResponse, UserResponse},
        },
        entities::users::user::User,
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::errors::AppError,
    repositories::users::user_repo::UserRepository,
    services::auth::{PasswordService, TokenService},
};

const INVALID_CREDENTIALS: &str = "사용자 이름 또는 비밀번호가 올바르지 않습니다";

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    passwords: Arc<PasswordService>,
    tokens: Arc<TokenService>,
}

impl UserService {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        passwords: Arc<PasswordService>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self { user_repo, passwords, tokens }
    }

    /// 새 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 사용자명 길이(3-15자) 또는 빈 비밀번호
    /// * `AppError::ConflictError` - 이미 존재하는 사용자명
    pub async fn register(&self, request: RegisterRequest) -> Result<UserResponse, AppError> {
        request.validate()?;

        let password_hash = self.passwords.hash(&request.password)?;
        let user = self.user_repo
            .create(User::new(request.username, password_hash))
            .await?;

        info!("사용자 등록 완료: {}", user.username);
        Ok(UserResponse::from(user))
    }

    /// 로그인 후 액세스 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 사용자 미존재 또는 비밀번호 불일치 (동일 메시지)
    pub async fn login(&self, request: LoginRequest) -> Result<LoginResponse, AppError> {
        request.validate()?;

        let Some(user) = self.user_repo.find_by_username(&request.username).await? else {
            self.passwords.verify_dummy(&request.password);
            warn!("로그인 실패: {}", request.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        };

        if !self.passwords.verify(&request.password, &user.password_hash) {
            warn!("로그인 실패: {}", request.username);
            return Err(AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()));
        }

        let user_id = user.id_string().ok_or_else(|| {
            AppError::InternalError("사용자 ID가 없습니다".to_string())
        })?;
        let token = self.tokens.issue(&user_id, &user.username)?;

        info!("로그인 성공: {}", user.username);
        Ok(LoginResponse { token, username: user.username })
    }

    /// 인증된 사용자의 정보 조회
    ///
    /// 토큰 발급 이후 사용자가 사라졌다면 `NotFound`입니다.
    pub async fn me(&self, identity: &AuthenticatedUser) -> Result<UserResponse, AppError> {
        self.user_repo
            .find_by_id(&identity.user_id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))
    }
}

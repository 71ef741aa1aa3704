//! JWT 토큰 관리 서비스 구현
//!
//! HS256으로 서명한 액세스 토큰을 발급하고 검증합니다.
//! 서버 측 상태는 없으며, 만료 판정은 라이브러리 leeway 없이 직접 수행합니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    domain::models::{auth::authenticated_user::AuthenticatedUser, token::token::TokenClaims},
    errors::errors::{AppError, TokenError},
};

const BEARER_PREFIX: &str = "Bearer ";
const ACCESS_TOKEN_TTL_HOURS: i64 = 2;

/// JWT 토큰 관리 서비스
///
/// 서명 키는 생성 시점에 한 번 받아 보관합니다.
/// `main`에서 한 번 만들어 `web::Data`로 공유합니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// 액세스 토큰 유효 시간은 발급 시각부터 2시간으로 고정됩니다.
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl: Duration::hours(ACCESS_TOKEN_TTL_HOURS),
        }
    }

    /// `JWT_SECRET`으로 생성
    ///
    /// 서명 키가 없으면 에러를 반환하므로 서버는 기동하지 않습니다.
    pub fn from_config() -> Result<Self, AppError> {
        let secret = JwtConfig::secret()?;
        Ok(Self::new(&secret))
    }

    /// 현재 시각 기준으로 토큰 발급
    pub fn issue(&self, user_id: &str, username: &str) -> Result<String, AppError> {
        self.issue_at(user_id, username, Utc::now())
    }

    /// 주어진 시각을 `iat`으로 토큰 발급
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue_at(
        &self,
        user_id: &str,
        username: &str,
        now: DateTime<Utc>,
    ) -> Result<String, AppError> {
        let claims = TokenClaims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 현재 시각 기준으로 토큰 검증
    pub fn validate(&self, token: &str) -> Result<AuthenticatedUser, TokenError> {
        self.validate_at(token, Utc::now())
    }

    /// 주어진 시각 기준으로 토큰 검증
    ///
    /// * 서명 불일치, 형식 오류, 필수 클레임 누락 → [`TokenError::Invalid`]
    /// * `now >= exp` → [`TokenError::Expired`]
    pub fn validate_at(
        &self,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<AuthenticatedUser, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|_| TokenError::Invalid)?;

        if now.timestamp() >= claims.exp {
            return Err(TokenError::Expired);
        }

        if claims.sub.is_empty() {
            return Err(TokenError::Invalid);
        }

        Ok(AuthenticatedUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// ```rust,ignore
    /// let token = token_service.extract_bearer_token("Bearer eyJhbGciOi...")?;
    /// ```
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        match auth_header.strip_prefix(BEARER_PREFIX) {
            Some(token) if !token.trim().is_empty() => Ok(token.trim()),
            _ => Err(AppError::AuthenticationError(
                "유효하지 않은 인증 헤더 형식입니다".to_string(),
            )),
        }
    }
}

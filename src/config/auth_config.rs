//! # Authentication Configuration Module
//!
//! JWT 토큰과 이미지 호스트(Cloudinary) 자격 증명 설정을 관리합니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! # JWT 서명 키 (설정되지 않으면 서버가 시작되지 않음)
//! export JWT_SECRET="your-super-secret-jwt-key"
//!
//! # Cloudinary
//! export CLOUDINARY_CLOUD_NAME="your-cloud"
//! export CLOUDINARY_API_KEY="1234567890"
//! export CLOUDINARY_SECRET_KEY="your-api-secret"
//! export CLOUDINARY_FOLDER="cars"
//! ```

use std::env;
use crate::errors::AppError;

/// JWT 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 서명 키를 반환합니다.
    ///
    /// 기본값은 없습니다. `JWT_SECRET`이 없거나 비어 있으면 에러입니다.
    pub fn secret() -> Result<String, AppError> {
        Self::secret_from(env::var("JWT_SECRET").ok())
    }

    /// 주어진 값이 서명 키로 쓸 수 있는지 검사합니다.
    pub fn secret_from(value: Option<String>) -> Result<String, AppError> {
        match value {
            Some(secret) if !secret.trim().is_empty() => Ok(secret),
            _ => Err(AppError::InternalError(
                "JWT_SECRET must be set to a non-empty value".to_string(),
            )),
        }
    }
}

/// Cloudinary 업로드 자격 증명
#[derive(Debug, Clone)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
    /// 업로드 대상 폴더
    pub folder: String,
}

impl CloudinaryConfig {
    /// 환경 변수에서 자격 증명을 읽습니다.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            cloud_name: required("CLOUDINARY_CLOUD_NAME")?,
            api_key: required("CLOUDINARY_API_KEY")?,
            api_secret: required("CLOUDINARY_SECRET_KEY")?,
            folder: env::var("CLOUDINARY_FOLDER").unwrap_or_else(|_| "cars".to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, AppError> {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::InternalError(format!("{} must be set", name)))
}

//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 자동차 마켓 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_car(id: &str) -> Result<Car, AppError> {
//!     car_repo.find_by_id(id).await?
//!         .ok_or_else(|| AppError::NotFound(format!("Car {} not found", id)))
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 모든 에러는 요청 단위로 종결되며 내부적으로 재시도하지 않습니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (422 Unprocessable Entity)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 권한 부족 에러 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 이미지 호스트 업로드 실패 (502 Bad Gateway)
    #[error("Upload error: {0}")]
    UploadError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 에러에 대응하는 HTTP 상태 코드
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::UploadError(_) => StatusCode::BAD_GATEWAY,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 토큰 검증 실패 종류
///
/// 위변조와 만료 외의 정보는 노출하지 않습니다.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    /// 현재 시각이 만료 시각 이후
    #[error("토큰이 만료되었습니다")]
    Expired,

    /// 서명 불일치 또는 잘못된 형식
    #[error("유효하지 않은 토큰입니다")]
    Invalid,
}

impl From<TokenError> for AppError {
    fn from(err: TokenError) -> Self {
        AppError::AuthenticationError(err.to_string())
    }
}

/// `validator`가 스키마 단위 검증 실패를 모아 두는 키
const SCHEMA_ERRORS_KEY: &str = "__all__";

/// `validator` 검증 실패를 필드 목록이 포함된 422 에러로 변환
///
/// 메시지는 필드명 알파벳 순으로 `field: message` 형태를 `; `로 연결합니다.
/// 특정 필드에 속하지 않는 스키마 검증 실패는 메시지만 남깁니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<String> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect::<Vec<_>>()
                    .join(", ");
                if field == SCHEMA_ERRORS_KEY {
                    detail
                } else {
                    format!("{}: {}", field, detail)
                }
            })
            .collect();
        fields.sort();

        AppError::ValidationError(fields.join("; "))
    }
}

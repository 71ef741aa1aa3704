use std::future::{ready, Ready};
use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
///
/// [`AuthMiddleware`](crate::middlewares::AuthMiddleware)가 검증에 성공하면
/// Request Extensions에 저장하고, 핸들러는 extractor로 꺼내 씁니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (ObjectId 16진수 문자열)
    pub user_id: String,

    /// 토큰 발급 시점의 사용자 이름
    pub username: String,
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                "인증되지 않은 요청입니다"
            ))),
        }
    }
}

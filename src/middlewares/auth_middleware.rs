//! JWT 인증 미들웨어
//!
//! 보호된 핸들러 앞에서 Bearer 토큰을 검증하고 사용자 정보를 Request Extensions에 넣습니다.
//! 실패하면 핸들러를 호출하지 않고 401을 반환합니다.
//!
//! ```rust,ignore
//! #[get("/me", wrap = "AuthMiddleware::required()")]
//! async fn me(user: AuthenticatedUser) -> impl Responder { ... }
//! ```

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// [`TokenService`](crate::services::auth::TokenService)는 `web::Data`로 등록되어 있어야 합니다.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::auth::authenticated_user::AuthenticatedUser;
    use crate::services::auth::TokenService;
    use actix_web::{get, http::StatusCode, test, web, App, HttpResponse};
    use chrono::{Duration, Utc};

    #[get("/whoami", wrap = "AuthMiddleware::required()")]
    async fn whoami(user: AuthenticatedUser) -> HttpResponse {
        HttpResponse::Ok().body(user.username)
    }

    fn tokens() -> web::Data<TokenService> {
        web::Data::new(TokenService::new("middleware-secret"))
    }

    #[actix_web::test]
    async fn test_missing_header_is_rejected() {
        let app = test::init_service(App::new().app_data(tokens()).service(whoami)).await;

        let req = test::TestRequest::get().uri("/whoami").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_non_bearer_header_is_rejected() {
        let app = test::init_service(App::new().app_data(tokens()).service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", "Basic YWxpY2U6cHc="))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_valid_token_reaches_handler() {
        let data = tokens();
        let token = data.issue("user-1", "alice").unwrap();
        let app = test::init_service(App::new().app_data(data).service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "alice");
    }

    #[actix_web::test]
    async fn test_expired_and_invalid_have_distinct_messages() {
        let data = tokens();
        let expired = data
            .issue_at("user-1", "alice", Utc::now() - Duration::hours(3))
            .unwrap();
        let foreign = TokenService::new("other-secret")
            .issue("user-1", "alice")
            .unwrap();
        let app = test::init_service(App::new().app_data(data).service(whoami)).await;

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", expired)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("만료"));

        let req = test::TestRequest::get()
            .uri("/whoami")
            .insert_header(("Authorization", format!("Bearer {}", foreign)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("유효하지 않은"));
    }
}

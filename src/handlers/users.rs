//! # User HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/users/register` | - | 200 `{id, username}` |
//! | `POST` | `/users/login` | - | 200 `{token, username}` |
//! | `GET` | `/users/me` | Bearer | 200 `{id, username}` |

use actix_web::{get, post, web, HttpResponse};

use crate::{
    domain::{
        dto::users::request::{LoginRequest, RegisterRequest},
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::errors::AppError,
    middlewares::AuthMiddleware,
    services::users::UserService,
};

/// 회원가입
///
/// ```bash
/// curl -X POST http://localhost:8080/users/register \
///   -H "Content-Type: application/json" \
///   -d '{"username":"alice","password":"secret"}'
/// ```
#[post("/register")]
pub async fn register(
    service: web::Data<UserService>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.register(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 로그인
#[post("/login")]
pub async fn login(
    service: web::Data<UserService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let response = service.login(payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

/// 현재 로그인한 사용자 정보
#[get("/me", wrap = "AuthMiddleware::required()")]
pub async fn me(
    service: web::Data<UserService>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let response = service.me(&user).await?;
    Ok(HttpResponse::Ok().json(response))
}

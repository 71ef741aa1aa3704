//! API 라우트 설정 모듈
//!
//! ```text
//! GET    /                  상태 확인
//! POST   /users/register
//! POST   /users/login
//! GET    /users/me          Bearer
//! POST   /cars              Bearer, multipart
//! GET    /cars?page=N
//! GET    /cars/{id}
//! PUT    /cars/{id}         Bearer, 소유자
//! DELETE /cars/{id}         Bearer, 소유자
//! ```
//!
//! 뒤에 붙은 `/`는 `NormalizePath::trim`이 제거하므로 `/cars/`와 `/cars`는 같은 경로입니다.
//!
//! ```rust,ignore
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::{errors::errors::AppError, handlers};

/// 모든 라우트와 요청 추출기 설정을 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .service(root);

    configure_user_routes(cfg);
    configure_car_routes(cfg);
}

fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::register)
            .service(handlers::users::login)
            .service(handlers::users::me),
    );
}

fn configure_car_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/cars")
            .service(handlers::cars::create_car)
            .service(handlers::cars::list_cars)
            .service(handlers::cars::get_car)
            .service(handlers::cars::update_car)
            .service(handlers::cars::delete_car),
    );
}

/// JSON 본문 파싱 실패를 422로 변환
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("body: {}", err)).into()
    })
}

/// 쿼리 문자열 파싱 실패를 422로 변환
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::ValidationError(format!("query: {}", err)).into()
    })
}

/// 서비스 상태 확인
#[get("/")]
async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "Root working",
        "service": "car_market_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use actix_web::{http::StatusCode, middleware::NormalizePath, test, App};
    use serde_json::Value;

    use crate::repositories::cars::mock::InMemoryCarRepository;
    use crate::repositories::users::mock::InMemoryUserRepository;
    use crate::services::{
        auth::{PasswordService, TokenService},
        cars::CarService,
        images::mock::FakeImageHost,
        users::UserService,
    };

    const BOUNDARY: &str = "----car-market-boundary";

    struct Services {
        tokens: web::Data<TokenService>,
        users: web::Data<UserService>,
        cars: web::Data<CarService>,
    }

    fn services() -> Services {
        let tokens = Arc::new(TokenService::new("routes-secret"));
        let passwords = Arc::new(PasswordService::new(4).unwrap());
        let users = UserService::new(Arc::new(InMemoryUserRepository::new()), passwords, tokens.clone());
        let cars = CarService::new(Arc::new(InMemoryCarRepository::new()), Arc::new(FakeImageHost::ok()));

        Services {
            tokens: web::Data::from(tokens),
            users: web::Data::new(users),
            cars: web::Data::new(cars),
        }
    }

    macro_rules! app {
        ($services:expr) => {
            test::init_service(
                App::new()
                    .app_data($services.tokens.clone())
                    .app_data($services.users.clone())
                    .app_data($services.cars.clone())
                    .wrap(NormalizePath::trim())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn car_form(fields: &[(&str, &str)], picture: Option<&[u8]>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                    BOUNDARY, name, value
                )
                .as_bytes(),
            );
        }
        if let Some(bytes) = picture {
            body.extend_from_slice(
                format!(
                    "--{}\r\nContent-Disposition: form-data; name=\"picture\"; filename=\"car.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n",
                    BOUNDARY
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        body
    }

    fn multipart_header() -> (&'static str, String) {
        ("Content-Type", format!("multipart/form-data; boundary={}", BOUNDARY))
    }

    const FIESTA: &[(&str, &str)] = &[
        ("brand", "ford"),
        ("make", "fiesta"),
        ("year", "2019"),
        ("cm3", "1500"),
        ("km", "120000"),
        ("price", "10000"),
    ];

    #[actix_web::test]
    async fn test_root_is_public() {
        let svc = services();
        let app = app!(svc);

        let req = test::TestRequest::get().uri("/").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["message"], "Root working");
    }

    #[actix_web::test]
    async fn test_full_marketplace_scenario() {
        let svc = services();
        let app = app!(svc);
        let credentials = json!({ "username": "alice", "password": "wonderland" });

        // 회원가입
        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(&credentials)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let registered: Value = test::read_body_json(resp).await;
        assert_eq!(registered["username"], "alice");
        assert!(registered.get("password_hash").is_none());

        // 중복 가입
        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(&credentials)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        // 로그인
        let req = test::TestRequest::post()
            .uri("/users/login")
            .set_json(&credentials)
            .to_request();
        let login: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(login["username"], "alice");
        let token = login["token"].as_str().unwrap().to_string();
        let bearer = ("Authorization", format!("Bearer {}", token));

        // 내 정보
        let req = test::TestRequest::get()
            .uri("/users/me")
            .insert_header(bearer.clone())
            .to_request();
        let me: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(me["username"], "alice");
        assert_eq!(me["id"], registered["id"]);

        // 매물 등록
        let req = test::TestRequest::post()
            .uri("/cars/")
            .insert_header(bearer.clone())
            .insert_header(multipart_header())
            .set_payload(car_form(FIESTA, Some(b"\xFF\xD8\xFFjpeg")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let car: Value = test::read_body_json(resp).await;
        assert_eq!(car["brand"], "Ford");
        assert_eq!(car["make"], "Fiesta");
        assert_eq!(car["user_id"], registered["id"]);
        assert!(car["picture_url"].is_string());

        // 목록과 단건 조회는 공개
        let req = test::TestRequest::get().uri("/cars/").to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list["page"], 1);
        assert_eq!(list["has_more"], false);
        assert_eq!(list["cars"].as_array().unwrap().len(), 1);

        let uri = format!("/cars/{}", car["id"].as_str().unwrap());
        let req = test::TestRequest::get().uri(&uri).to_request();
        let fetched: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched["id"], car["id"]);

        // 수정 후 삭제
        let req = test::TestRequest::put()
            .uri(&uri)
            .insert_header(bearer.clone())
            .set_json(json!({ "price": 9500 }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["price"], 9500);

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(bearer)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get().uri(&uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_login_failures_are_401() {
        let svc = services();
        let app = app!(svc);

        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({ "username": "alice", "password": "pw" }))
            .to_request();
        test::call_service(&app, req).await;

        for body in [
            json!({ "username": "alice", "password": "wrong" }),
            json!({ "username": "nobody", "password": "pw" }),
        ] {
            let req = test::TestRequest::post().uri("/users/login").set_json(body).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        }
    }

    #[actix_web::test]
    async fn test_invalid_bodies_are_422() {
        let svc = services();
        let app = app!(svc);

        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({ "username": "al", "password": "pw" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::post()
            .uri("/users/register")
            .set_json(json!({ "username": "alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/cars?page=0").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/cars?page=abc").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let req = test::TestRequest::get().uri("/cars?page=1000000000000000000").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[actix_web::test]
    async fn test_car_creation_requires_token_and_valid_form() {
        let svc = services();
        let app = app!(svc);

        let req = test::TestRequest::post()
            .uri("/cars")
            .insert_header(multipart_header())
            .set_payload(car_form(FIESTA, Some(b"jpeg")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

        let token = svc.tokens.issue(&mongodb::bson::oid::ObjectId::new().to_hex(), "alice").unwrap();
        let mut fields = FIESTA.to_vec();
        fields[2] = ("year", "1970");
        let req = test::TestRequest::post()
            .uri("/cars")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header(multipart_header())
            .set_payload(car_form(&fields, Some(b"jpeg")))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].as_str().unwrap().contains("year"));
    }

    #[actix_web::test]
    async fn test_car_form_rejects_oversized_and_unknown_fields() {
        let svc = services();
        let app = app!(svc);
        let token = svc.tokens.issue(&mongodb::bson::oid::ObjectId::new().to_hex(), "alice").unwrap();

        let long_brand = "f".repeat(2048);
        let mut oversized = FIESTA.to_vec();
        oversized[0] = ("brand", long_brand.as_str());

        let mut unknown = FIESTA.to_vec();
        unknown.push(("notes", "one owner"));

        for (fields, expected) in [(oversized, "brand"), (unknown, "notes")] {
            let req = test::TestRequest::post()
                .uri("/cars")
                .insert_header(("Authorization", format!("Bearer {}", token)))
                .insert_header(multipart_header())
                .set_payload(car_form(&fields, Some(b"jpeg")))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
            let body: Value = test::read_body_json(resp).await;
            assert!(body["error"].as_str().unwrap().contains(expected));
        }
    }

    #[actix_web::test]
    async fn test_unknown_car_ids_are_404() {
        let svc = services();
        let app = app!(svc);

        for uri in ["/cars/not-a-valid-id", "/cars/507f1f77bcf86cd799439011"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        }
    }

    #[actix_web::test]
    async fn test_other_users_cannot_modify_car() {
        let svc = services();
        let app = app!(svc);

        let owner = svc.tokens.issue(&mongodb::bson::oid::ObjectId::new().to_hex(), "alice").unwrap();
        let intruder = svc.tokens.issue(&mongodb::bson::oid::ObjectId::new().to_hex(), "bob").unwrap();

        let req = test::TestRequest::post()
            .uri("/cars")
            .insert_header(("Authorization", format!("Bearer {}", owner)))
            .insert_header(multipart_header())
            .set_payload(car_form(FIESTA, Some(b"jpeg")))
            .to_request();
        let car: Value = test::call_and_read_body_json(&app, req).await;
        let uri = format!("/cars/{}", car["id"].as_str().unwrap());

        let req = test::TestRequest::delete()
            .uri(&uri)
            .insert_header(("Authorization", format!("Bearer {}", intruder)))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }
}

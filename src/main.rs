//! 자동차 마켓 백엔드 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤, 저장소와 서비스를 한 번 생성해
//! `web::Data`로 등록하고 Actix-web HTTP 서버를 구동합니다.

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use car_market_backend::config::{CloudinaryConfig, PasswordConfig, ServerConfig};
use car_market_backend::db::Database;
use car_market_backend::repositories::cars::{CarRepository, MongoCarRepository};
use car_market_backend::repositories::users::{MongoUserRepository, UserRepository};
use car_market_backend::routes::configure_all_routes;
use car_market_backend::services::auth::{PasswordService, TokenService};
use car_market_backend::services::cars::CarService;
use car_market_backend::services::images::{CloudinaryImageHost, ImageHost};
use car_market_backend::services::users::UserService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 자동차 마켓 백엔드 시작중...");

    info!("📡 데이터베이스 연결 중...");
    let database = Arc::new(
        Database::new()
            .await
            .expect("데이터베이스 연결 실패")
    );

    let user_repo: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database.clone()));
    let car_repo: Arc<dyn CarRepository> = Arc::new(MongoCarRepository::new(database));

    user_repo.create_indexes().await.expect("users 인덱스 생성 실패");
    car_repo.create_indexes().await.expect("cars 인덱스 생성 실패");

    let tokens = Arc::new(TokenService::from_config().expect("JWT 설정 오류"));
    let passwords = Arc::new(
        PasswordService::new(PasswordConfig::bcrypt_cost()).expect("비밀번호 서비스 초기화 실패")
    );
    let images: Arc<dyn ImageHost> = Arc::new(CloudinaryImageHost::new(
        CloudinaryConfig::from_env().expect("Cloudinary 설정 오류")
    ));

    let user_service = web::Data::new(UserService::new(user_repo, passwords, tokens.clone()));
    let car_service = web::Data::new(CarService::new(car_repo, images));
    let token_service = web::Data::from(tokens);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    let host = ServerConfig::host();
    let port = ServerConfig::port();
    info!("🌐 서버가 http://{}:{} 에서 실행중입니다", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(token_service.clone())
            .app_data(user_service.clone())
            .app_data(car_service.clone())
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind((host.as_str(), port))?
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG` 기본값: `info,actix_web=debug`
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정
///
/// `CORS_ALLOWED_ORIGINS`가 비어 있으면 모든 Origin을 허용합니다.
fn configure_cors() -> Cors {
    let origins = ServerConfig::cors_allowed_origins();

    let cors = if origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            .supports_credentials()
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}

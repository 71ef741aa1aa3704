//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 패스워드 해싱 관련 설정을 관리합니다.

use std::env;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10
    /// - Production: 12
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 및 CORS 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (기본값: 8080, 환경 변수 `PORT`)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소 (기본값: "0.0.0.0", 환경 변수 `HOST`)
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }

    /// CORS 허용 Origin 목록
    ///
    /// `CORS_ALLOWED_ORIGINS`는 쉼표로 구분합니다. 비어 있으면 모든 Origin을 허용합니다.
    pub fn cors_allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// MongoDB 연결 설정
pub struct DatabaseConfig;

impl DatabaseConfig {
    /// MongoDB 연결 URI
    ///
    /// `MONGODB_URI`, 없으면 `DB_URL`, 둘 다 없으면 로컬 기본값을 사용합니다.
    pub fn uri() -> String {
        env::var("MONGODB_URI")
            .or_else(|_| env::var("DB_URL"))
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    /// 사용할 데이터베이스 이름 (`DATABASE_NAME` 또는 `DB_NAME`)
    pub fn database_name() -> String {
        env::var("DATABASE_NAME")
            .or_else(|_| env::var("DB_NAME"))
            .unwrap_or_else(|_| "car_market_dev".to_string())
    }
}

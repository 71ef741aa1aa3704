//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 전달됩니다.
//! 저장소와 이미지 호스트는 trait 객체로 주입받습니다.
//!
//! ```rust,ignore
//! let user_service = UserService::new(user_repo, passwords, tokens.clone());
//! let car_service = CarService::new(car_repo, images);
//! ```

pub mod auth;
pub mod users;
pub mod cars;
pub mod images;

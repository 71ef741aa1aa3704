//! 자동차 매물 서비스 모듈

pub mod car_service;

pub use car_service::{CarService, CARS_PER_PAGE};

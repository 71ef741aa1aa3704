//! 자동차 매물 데이터 액세스 계층

pub mod car_repo;

#[cfg(test)]
pub mod mock;

pub use car_repo::{CarRepository, MongoCarRepository};

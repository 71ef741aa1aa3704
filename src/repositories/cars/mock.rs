//! 테스트용 인메모리 매물 저장소

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use super::car_repo::CarRepository;
use crate::{
    domain::{dto::cars::request::UpdateCarRequest, entities::cars::car::Car},
    errors::errors::AppError,
};

#[derive(Default)]
pub struct InMemoryCarRepository {
    cars: Mutex<Vec<Car>>,
}

impl InMemoryCarRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cars.lock().unwrap().len()
    }
}

fn parse(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id).ok()
}

#[async_trait]
impl CarRepository for InMemoryCarRepository {
    async fn create(&self, mut car: Car) -> Result<Car, AppError> {
        car.id = Some(ObjectId::new());
        self.cars.lock().unwrap().push(car.clone());
        Ok(car)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Car>, AppError> {
        let Some(oid) = parse(id) else { return Ok(None) };
        let cars = self.cars.lock().unwrap();
        Ok(cars.iter().find(|c| c.id == Some(oid)).cloned())
    }

    async fn list(&self, skip: u64, limit: i64) -> Result<Vec<Car>, AppError> {
        let mut cars = self.cars.lock().unwrap().clone();
        cars.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(cars
            .into_iter()
            .skip(skip as usize)
            .take(limit.max(0) as usize)
            .collect())
    }

    async fn update(&self, id: &str, changes: UpdateCarRequest) -> Result<Option<Car>, AppError> {
        let Some(oid) = parse(id) else { return Ok(None) };
        let mut cars = self.cars.lock().unwrap();
        let Some(car) = cars.iter_mut().find(|c| c.id == Some(oid)) else {
            return Ok(None);
        };

        if let Some(brand) = changes.brand {
            car.brand = brand;
        }
        if let Some(make) = changes.make {
            car.make = make;
        }
        if let Some(year) = changes.year {
            car.year = year;
        }
        if let Some(cm3) = changes.cm3 {
            car.cm3 = cm3;
        }
        if let Some(km) = changes.km {
            car.km = km;
        }
        if let Some(price) = changes.price {
            car.price = price;
        }
        Ok(Some(car.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let Some(oid) = parse(id) else { return Ok(false) };
        let mut cars = self.cars.lock().unwrap();
        let before = cars.len();
        cars.retain(|c| c.id != Some(oid));
        Ok(cars.len() != before)
    }

    async fn create_indexes(&self) -> Result<(), AppError> {
        Ok(())
    }
}

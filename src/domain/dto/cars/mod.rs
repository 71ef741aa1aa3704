//! 자동차 매물 DTO
//!
//! 등록은 multipart 폼, 수정은 JSON 본문으로 받습니다.

pub mod request;
pub mod response;

pub use request::{CarListQuery, CarPicture, CreateCarRequest, UpdateCarRequest};
pub use response::{CarListResponse, CarResponse};

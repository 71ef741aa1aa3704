//! # HTTP Request Handlers Module
//!
//! 핸들러는 요청을 DTO로 바꿔 서비스에 넘기고, 결과를 JSON 응답으로 만듭니다.
//! 서비스는 `web::Data`로 주입받으며, 보호된 핸들러는 매크로의 `wrap` 인자로
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware)를 붙입니다.
//!
//! ```text
//! handlers/
//! ├── users.rs   /users/register, /users/login, /users/me
//! └── cars.rs    /cars, /cars/{id}
//! ```

pub mod users;
pub mod cars;

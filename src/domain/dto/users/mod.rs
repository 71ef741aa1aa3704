//! # User Data Transfer Objects Module
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs    # 회원가입 요청
//! │   └── auth_request.rs   # 로그인 요청
//! └── response/
//!     └── user_response.rs  # 사용자/로그인 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;

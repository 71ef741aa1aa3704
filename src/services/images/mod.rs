//! 매물 이미지 업로드
//!
//! [`ImageHost`]는 이미지 바이트를 받아 공개 URL을 돌려주는 외부 협력자입니다.
//! 운영에서는 [`CloudinaryImageHost`]를 사용합니다.

pub mod cloudinary;

#[cfg(test)]
pub mod mock;

use async_trait::async_trait;

use crate::errors::errors::AppError;

pub use cloudinary::CloudinaryImageHost;

/// 이미지 호스팅 인터페이스
///
/// 실패는 [`AppError::UploadError`]로 반환하며 재시도하지 않습니다.
#[async_trait]
pub trait ImageHost: Send + Sync {
    async fn upload(&self, bytes: Vec<u8>, file_name: Option<String>) -> Result<String, AppError>;
}

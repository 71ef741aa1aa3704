//! 테스트용 이미지 호스트

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::ImageHost;
use crate::errors::errors::AppError;

/// 업로드 횟수를 세고 고정 URL을 돌려주거나, 항상 실패합니다.
pub struct FakeImageHost {
    fail: bool,
    uploads: AtomicUsize,
}

impl FakeImageHost {
    pub fn ok() -> Self {
        Self { fail: false, uploads: AtomicUsize::new(0) }
    }

    pub fn failing() -> Self {
        Self { fail: true, uploads: AtomicUsize::new(0) }
    }

    pub fn uploads(&self) -> usize {
        self.uploads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageHost for FakeImageHost {
    async fn upload(&self, bytes: Vec<u8>, _file_name: Option<String>) -> Result<String, AppError> {
        let n = self.uploads.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail {
            return Err(AppError::UploadError("image host unavailable".to_string()));
        }
        Ok(format!("https://images.test/cars/{}-{}.jpg", n, bytes.len()))
    }
}

//! Cloudinary 서명 업로드
//!
//! `POST https://api.cloudinary.com/v1_1/{cloud_name}/image/upload`
//!
//! 서명은 `file`, `api_key`, `signature*`를 제외한 파라미터를 이름순으로
//! `k=v&k=v` 형태로 잇고, API secret을 붙여 SHA-256 16진수로 계산합니다.

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, error};
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::ImageHost;
use crate::{config::CloudinaryConfig, errors::errors::AppError};

const UPLOAD_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// 업로드 시 적용하는 변환 (가로 800px 채우기)
const TRANSFORMATION: &str = "c_fill,w_800";

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UploadErrorBody {
    error: UploadErrorDetail,
}

#[derive(Debug, Deserialize)]
struct UploadErrorDetail {
    message: String,
}

pub struct CloudinaryImageHost {
    config: CloudinaryConfig,
    http: reqwest::Client,
}

impl CloudinaryImageHost {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self { config, http: reqwest::Client::new() }
    }

    fn upload_url(&self) -> String {
        format!("{}/{}/image/upload", UPLOAD_BASE_URL, self.config.cloud_name)
    }

    /// 서명 대상 파라미터 (이름순)
    fn signed_params(&self, timestamp: i64) -> Vec<(&'static str, String)> {
        vec![
            ("folder", self.config.folder.clone()),
            ("timestamp", timestamp.to_string()),
            ("transformation", TRANSFORMATION.to_string()),
        ]
    }
}

/// 요청 서명 계산
fn sign(params: &[(&str, String)], api_secret: &str) -> String {
    let mut sorted: Vec<&(&str, String)> = params.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let joined = sorted
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(joined.as_bytes());
    hasher.update(api_secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[async_trait]
impl ImageHost for CloudinaryImageHost {
    async fn upload(&self, bytes: Vec<u8>, file_name: Option<String>) -> Result<String, AppError> {
        let params = self.signed_params(Utc::now().timestamp());
        let signature = sign(&params, &self.config.api_secret);

        let file_part = Part::bytes(bytes)
            .file_name(file_name.unwrap_or_else(|| "picture".to_string()));

        let mut form = Form::new()
            .part("file", file_part)
            .text("api_key", self.config.api_key.clone())
            .text("signature", signature)
            .text("signature_algorithm", "sha256");
        for (key, value) in params {
            form = form.text(key, value);
        }

        let response = self.http
            .post(self.upload_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("이미지 업로드 요청 실패: {}", e);
                AppError::UploadError(format!("이미지 호스트에 연결할 수 없습니다: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<UploadErrorBody>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_else(|_| status.to_string());
            error!("이미지 업로드 거부: {} ({})", message, status);
            return Err(AppError::UploadError(message));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| AppError::UploadError(format!("업로드 응답 해석 실패: {}", e)))?;

        let url = body.secure_url.or(body.url).ok_or_else(|| {
            AppError::UploadError("업로드 응답에 URL이 없습니다".to_string())
        })?;

        debug!("이미지 업로드 완료: {}", url);
        Ok(url)
    }
}

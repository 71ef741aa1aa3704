//! 비밀번호 해싱 서비스
//!
//! bcrypt로 해싱하고 검증합니다. 솔트는 해시마다 bcrypt가 생성합니다.

use std::time::Instant;

use log::debug;

use crate::errors::errors::AppError;

/// 존재하지 않는 사용자 로그인 시 검증 비용을 맞추기 위한 평문
const DUMMY_PASSWORD: &str = "car-market-dummy-password";

/// bcrypt 기반 자격 증명 저장소
pub struct PasswordService {
    cost: u32,
    dummy_hash: String,
}

impl PasswordService {
    /// 주어진 cost로 서비스를 생성합니다.
    ///
    /// 생성 시점에 더미 해시를 한 번 계산해 둡니다.
    pub fn new(cost: u32) -> Result<Self, AppError> {
        let dummy_hash = bcrypt::hash(DUMMY_PASSWORD, cost)
            .map_err(|e| AppError::InternalError(format!("더미 해시 생성 실패: {}", e)))?;

        Ok(Self { cost, dummy_hash })
    }

    /// 평문 비밀번호 해싱
    pub fn hash(&self, plaintext: &str) -> Result<String, AppError> {
        let started = Instant::now();
        let hashed = bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        debug!("Password hashing took: {:?}", started.elapsed());

        Ok(hashed)
    }

    /// 평문과 해시 비교
    ///
    /// 해시 문자열이 bcrypt 형식이 아니면 `false`입니다.
    pub fn verify(&self, plaintext: &str, hashed: &str) -> bool {
        let started = Instant::now();
        let matched = bcrypt::verify(plaintext, hashed).unwrap_or(false);
        debug!("Password verification took: {:?}", started.elapsed());

        matched
    }

    /// 더미 해시에 대해 검증을 수행하고 결과는 버립니다.
    pub fn verify_dummy(&self, plaintext: &str) {
        let _ = bcrypt::verify(plaintext, &self.dummy_hash);
    }
}

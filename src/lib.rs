//! 자동차 마켓 백엔드
//!
//! 사용자가 가입하고 로그인해 자동차 매물을 이미지와 함께 등록하고,
//! 누구나 매물을 조회할 수 있는 REST API 서비스입니다.
//!
//! # Features
//!
//! - **사용자**: 회원가입, 로그인, 내 정보 조회
//! - **JWT 인증**: HS256 액세스 토큰, 요청 단위 신원 추출
//! - **매물**: 등록(이미지 업로드 포함), 최신순 페이지 조회, 소유자 전용 수정/삭제
//! - **MongoDB**: 사용자/매물 영구 저장, 사용자명 유니크 인덱스
//! - **Cloudinary**: 매물 이미지 호스팅
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;

//! 공통 유틸리티 함수 모듈
//!
//! - [`string_utils`] - 폼 필드 검증과 타이틀 케이스 변환

pub mod string_utils;

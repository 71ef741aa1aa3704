//! # 문자열 유틸리티
//!
//! 폼 필드 정리와 매물 이름 정규화에 쓰는 함수들입니다.

use crate::errors::errors::AppError;

/// 필수 문자열 필드 검증 및 정리
///
/// 빈 문자열이나 공백만 있는 경우 ValidationError를 반환하고,
/// 유효한 문자열인 경우 앞뒤 공백을 제거한 문자열을 반환합니다.
///
/// ```rust,ignore
/// assert_eq!(validate_required_string("  Ford  ", "brand").unwrap(), "Ford");
/// assert!(validate_required_string("   ", "brand").is_err());
/// ```
pub fn validate_required_string(value: &str, field_name: &str) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::ValidationError(
            format!("{}: 필수 항목입니다", field_name)
        ));
    }
    Ok(trimmed.to_string())
}

/// 정수 폼 필드 파싱
///
/// 앞뒤 공백은 무시합니다. 정수가 아니면 필드명을 담은 ValidationError를 반환합니다.
pub fn parse_int_field(value: &str, field_name: &str) -> Result<i32, AppError> {
    let trimmed = validate_required_string(value, field_name)?;
    trimmed.parse::<i32>().map_err(|_| {
        AppError::ValidationError(format!("{}: 정수여야 합니다", field_name))
    })
}

/// 타이틀 케이스 변환
///
/// 단어 경계(글자가 아닌 문자 뒤)의 첫 글자는 대문자로, 나머지 글자는 소문자로 바꿉니다.
/// 숫자와 기호는 그대로 두며 단어 경계로 취급합니다.
///
/// ```rust,ignore
/// assert_eq!(title_case("fORD"), "Ford");
/// assert_eq!(title_case("mercedes-benz"), "Mercedes-Benz");
/// assert_eq!(title_case("3series"), "3Series");
/// ```
pub fn title_case(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    let mut prev_is_letter = false;

    for c in value.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_required_string() {
        assert_eq!(validate_required_string("Hello", "brand").unwrap(), "Hello");
        assert_eq!(validate_required_string("  World  ", "brand").unwrap(), "World");

        assert!(validate_required_string("", "brand").is_err());
        assert!(validate_required_string("\t\n", "brand").is_err());
    }

    #[test]
    fn test_parse_int_field() {
        assert_eq!(parse_int_field(" 2019 ", "year").unwrap(), 2019);

        let err = parse_int_field("twenty", "year").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(ref msg) if msg.starts_with("year")));

        assert!(parse_int_field("", "km").is_err());
        assert!(parse_int_field("12.5", "price").is_err());
    }

    #[test]
    fn test_title_case_words() {
        assert_eq!(title_case("ford"), "Ford");
        assert_eq!(title_case("FIESTA"), "Fiesta");
        assert_eq!(title_case("land rover"), "Land Rover");
        assert_eq!(title_case("mercedes-benz"), "Mercedes-Benz");
    }

    #[test]
    fn test_title_case_digits_break_words() {
        assert_eq!(title_case("3series"), "3Series");
        assert_eq!(title_case("a4 avant"), "A4 Avant");
        assert_eq!(title_case(""), "");
    }
}

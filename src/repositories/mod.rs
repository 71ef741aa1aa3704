//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 trait으로 정의되고, MongoDB 구현체와 테스트용 인메모리 구현체를 가집니다.
//! 서비스는 `Arc<dyn ...Repository>`만 의존합니다.
//!
//! ```rust,ignore
//! let database = Arc::new(Database::new().await?);
//! let users: Arc<dyn UserRepository> = Arc::new(MongoUserRepository::new(database.clone()));
//! ```

pub mod users;
pub mod cars;

use mongodb::error::{Error as MongoError, ErrorKind, WriteFailure};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 유니크 인덱스 위반 여부 확인
pub(crate) fn is_duplicate_key_error(err: &MongoError) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref write_error))
            if write_error.code == DUPLICATE_KEY_CODE
    )
}

#[cfg(test)]
pub(crate) fn write_error(code: i32) -> MongoError {
    use mongodb::bson::{doc, from_document};
    use mongodb::error::WriteError;

    let write_error: WriteError = from_document(doc! {
        "code": code,
        "errmsg": format!("E{} write failed", code),
    })
    .expect("WriteError document");

    MongoError::from(ErrorKind::Write(WriteFailure::WriteError(write_error)))
}

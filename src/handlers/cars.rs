//! # Car HTTP Handlers
//!
//! | 메서드 | 경로 | 인증 | 성공 |
//! |--------|------|------|------|
//! | `POST` | `/cars` | Bearer | 201 매물 (multipart) |
//! | `GET` | `/cars?page=N` | - | 200 `{cars, page, has_more}` |
//! | `GET` | `/cars/{id}` | - | 200 매물 |
//! | `PUT` | `/cars/{id}` | Bearer (소유자) | 200 매물 |
//! | `DELETE` | `/cars/{id}` | Bearer (소유자) | 204 |
//!
//! 등록 폼 필드: `brand`, `make`, `year`, `cm3`, `km`, `price`, `picture`(파일)

use std::collections::HashMap;

use actix_multipart::Multipart;
use actix_web::{delete, get, post, put, web, HttpResponse};
use futures_util::StreamExt;

use crate::{
    domain::{
        dto::cars::request::{CarListQuery, CarPicture, CreateCarRequest, UpdateCarRequest},
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::errors::AppError,
    middlewares::AuthMiddleware,
    services::cars::CarService,
    utils::string_utils::{parse_int_field, validate_required_string},
};

/// 업로드 이미지 최대 크기 (10MB)
const MAX_PICTURE_BYTES: usize = 10 * 1024 * 1024;
/// 텍스트 필드 최대 크기 (1KB)
const MAX_TEXT_FIELD_BYTES: usize = 1024;
const PICTURE_FIELD: &str = "picture";
const TEXT_FIELDS: [&str; 6] = ["brand", "make", "year", "cm3", "km", "price"];

/// 필드별 최대 크기. 정해진 폼 필드 외에는 받지 않습니다.
fn field_limit(name: &str) -> Result<usize, AppError> {
    if name == PICTURE_FIELD {
        Ok(MAX_PICTURE_BYTES)
    } else if TEXT_FIELDS.contains(&name) {
        Ok(MAX_TEXT_FIELD_BYTES)
    } else {
        Err(AppError::ValidationError(format!("{}: 알 수 없는 필드입니다", name)))
    }
}

/// multipart 폼에서 모은 값
#[derive(Default)]
struct CarForm {
    text: HashMap<String, String>,
    picture: Option<CarPicture>,
}

impl CarForm {
    async fn read(mut payload: Multipart) -> Result<Self, AppError> {
        let mut form = CarForm::default();

        while let Some(field) = payload.next().await {
            let mut field = field
                .map_err(|e| AppError::ValidationError(format!("form: {}", e)))?;

            let name = field.name().unwrap_or_default().to_string();
            let limit = field_limit(&name)?;
            let file_name = field
                .content_disposition()
                .and_then(|cd| cd.get_filename())
                .map(str::to_string);

            let mut bytes = Vec::new();
            while let Some(chunk) = field.next().await {
                let chunk = chunk
                    .map_err(|e| AppError::ValidationError(format!("{}: {}", name, e)))?;
                if bytes.len() + chunk.len() > limit {
                    return Err(AppError::ValidationError(format!(
                        "{}: 최대 {}바이트까지 허용됩니다",
                        name, limit
                    )));
                }
                bytes.extend_from_slice(&chunk);
            }

            if name == PICTURE_FIELD {
                if !bytes.is_empty() {
                    form.picture = Some(CarPicture { bytes, file_name });
                }
            } else {
                let value = String::from_utf8(bytes).map_err(|_| {
                    AppError::ValidationError(format!("{}: UTF-8 텍스트가 아닙니다", name))
                })?;
                form.text.insert(name, value);
            }
        }

        Ok(form)
    }

    fn text(&self, name: &str) -> &str {
        self.text.get(name).map(String::as_str).unwrap_or_default()
    }

    /// 누락 또는 정수 변환 실패 필드를 모두 모아 하나의 422로 반환
    fn into_parts(self) -> Result<(CreateCarRequest, CarPicture), AppError> {
        let mut problems = Vec::new();

        let mut text_field = |name: &str| match validate_required_string(self.text(name), name) {
            Ok(v) => v,
            Err(e) => {
                problems.push(e);
                String::new()
            }
        };
        let brand = text_field("brand");
        let make = text_field("make");

        let mut int_field = |name: &str| match parse_int_field(self.text(name), name) {
            Ok(v) => v,
            Err(e) => {
                problems.push(e);
                0
            }
        };
        let year = int_field("year");
        let cm3 = int_field("cm3");
        let km = int_field("km");
        let price = int_field("price");

        if self.picture.is_none() {
            problems.push(AppError::ValidationError(format!("{}: 필수 항목입니다", PICTURE_FIELD)));
        }

        if !problems.is_empty() {
            let message = problems
                .into_iter()
                .map(|p| match p {
                    AppError::ValidationError(msg) => msg,
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AppError::ValidationError(message));
        }

        let picture = self.picture.ok_or_else(|| {
            AppError::ValidationError(format!("{}: 필수 항목입니다", PICTURE_FIELD))
        })?;

        Ok((CreateCarRequest { brand, make, year, cm3, km, price }, picture))
    }
}

/// 매물 등록
///
/// ```bash
/// curl -X POST http://localhost:8080/cars/ \
///   -H "Authorization: Bearer $TOKEN" \
///   -F brand=ford -F make=fiesta -F year=2019 -F cm3=1500 -F km=120000 -F price=10000 \
///   -F picture=@car.jpg
/// ```
#[post("", wrap = "AuthMiddleware::required()")]
pub async fn create_car(
    service: web::Data<CarService>,
    user: AuthenticatedUser,
    payload: Multipart,
) -> Result<HttpResponse, AppError> {
    let (request, picture) = CarForm::read(payload).await?.into_parts()?;
    let car = service.create_car(&user, request, picture).await?;
    Ok(HttpResponse::Created().json(car))
}

#[get("")]
pub async fn list_cars(
    service: web::Data<CarService>,
    query: web::Query<CarListQuery>,
) -> Result<HttpResponse, AppError> {
    let response = service.list_cars(query.into_inner()).await?;
    Ok(HttpResponse::Ok().json(response))
}

#[get("/{car_id}")]
pub async fn get_car(
    service: web::Data<CarService>,
    car_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let car = service.get_car(&car_id).await?;
    Ok(HttpResponse::Ok().json(car))
}

#[put("/{car_id}", wrap = "AuthMiddleware::required()")]
pub async fn update_car(
    service: web::Data<CarService>,
    user: AuthenticatedUser,
    car_id: web::Path<String>,
    payload: web::Json<UpdateCarRequest>,
) -> Result<HttpResponse, AppError> {
    let car = service.update_car(&user, &car_id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(car))
}

#[delete("/{car_id}", wrap = "AuthMiddleware::required()")]
pub async fn delete_car(
    service: web::Data<CarService>,
    user: AuthenticatedUser,
    car_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    service.delete_car(&user, &car_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

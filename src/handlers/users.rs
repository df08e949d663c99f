//! # 사용자 관리 HTTP 핸들러
//!
//! 사용자 관리 API의 엔드포인트를 처리합니다. 각 핸들러는 해당 연산의
//! 검증기를 먼저 호출하고, 검증을 통과한 요청만 서비스 계층으로
//! 전달합니다. 검증 실패는 `AppError`를 통해 자동으로 분류된 HTTP
//! 응답이 됩니다.
//!
//! | 메서드   | 경로                  | 설명                        |
//! |----------|-----------------------|-----------------------------|
//! | `POST`   | `/api/v1/users`       | 사용자 생성                 |
//! | `PATCH`  | `/api/v1/users`       | 본인 프로필 부분 수정       |
//! | `DELETE` | `/api/v1/users/{uuid}`| 사용자 삭제 (관리자)        |
//! | `GET`    | `/api/v1/users`       | 본인 상세 조회              |
//! | `GET`    | `/api/v1/users/{uuid}`| 사용자 상세 조회            |

use actix_web::{delete, get, patch, post, web, HttpResponse};

use crate::core::errors::{AppError, ValidationKind};
use crate::domain::dto::users::request::{CreateUserInput, UpdateUserInput};
use crate::domain::models::auth::MaybeIdentity;
use crate::middlewares::user_validator::{
    validate_user_create_request, validate_user_detail_request, validate_user_remove_request,
    validate_user_update_request,
};
use crate::services::users::user_service::UserService;

/// 사용자 생성 핸들러
///
/// 최초 가입(빈 저장소)은 인증 없이 허용되며 관리자 계정이 됩니다.
/// 그 이후의 계정 생성은 관리자만 수행할 수 있습니다.
///
/// # 응답
///
/// * `201 Created` - 생성된 사용자 정보와 메시지
/// * `400/401/403/409` - 검증 실패 (분류별 상태 코드)
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserInput>,
    identity: MaybeIdentity,
) -> Result<HttpResponse, AppError> {
    let service = UserService::instance();

    let validated =
        validate_user_create_request(payload.into_inner(), identity.as_ref(), service.as_ref())
            .await?;

    let response = service.create_user(validated).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 본인 프로필 부분 수정 핸들러
///
/// 본문에 제공된 필드만 수정합니다. 수정 대상은 항상 호출자 본인입니다.
#[patch("")]
pub async fn update_user(
    payload: web::Json<UpdateUserInput>,
    identity: MaybeIdentity,
) -> Result<HttpResponse, AppError> {
    let validated = validate_user_update_request(payload.into_inner(), identity.as_ref())?;

    // 검증 통과가 인증 존재를 보장하지만, 타입 수준에서는 다시 확인
    let caller = identity
        .into_inner()
        .ok_or(AppError::Validation(ValidationKind::TokenInvalid))?;

    let service = UserService::instance();
    let response = service.update_user(&caller.uuid, validated).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 사용자 삭제 핸들러
///
/// 관리자 전용이며 자기 자신은 삭제할 수 없습니다.
#[delete("/{uuid}")]
pub async fn remove_user(
    path: web::Path<String>,
    identity: MaybeIdentity,
) -> Result<HttpResponse, AppError> {
    let uuid = path.into_inner();
    let service = UserService::instance();

    validate_user_remove_request(&uuid, identity.as_ref(), service.as_ref()).await?;

    service.remove_user(&uuid).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// 사용자 상세 조회 핸들러
///
/// 비어 있지 않은 uuid는 인증 없이 조회할 수 있습니다.
#[get("/{uuid}")]
pub async fn get_user_detail(
    path: web::Path<String>,
    identity: MaybeIdentity,
) -> Result<HttpResponse, AppError> {
    let validated = validate_user_detail_request(&path.into_inner(), identity.as_ref())?;

    let service = UserService::instance();
    let response = service.get_user_detail(&validated.uuid).await?;

    Ok(HttpResponse::Ok().json(response))
}

/// 본인 상세 조회 핸들러
///
/// 경로에 uuid가 없으므로 호출자 본인의 식별자로 대체됩니다.
/// 인증 정보가 없으면 `PARAMETER_ERROR`입니다.
#[get("")]
pub async fn get_my_detail(identity: MaybeIdentity) -> Result<HttpResponse, AppError> {
    let validated = validate_user_detail_request("", identity.as_ref())?;

    let service = UserService::instance();
    let response = service.get_user_detail(&validated.uuid).await?;

    Ok(HttpResponse::Ok().json(response))
}

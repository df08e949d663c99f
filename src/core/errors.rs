//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 검증 파이프라인이 선택하는 고정된 에러 분류(`ValidationKind`)와
//! 백엔드 전반의 에러 타입(`AppError`)을 정의합니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 검증기는 에러 응답 본문을 직접 만들지 않습니다. 분류만 선택하고,
//! HTTP 상태 코드와 JSON 본문으로의 변환은 전부 이 모듈이 담당합니다.

use actix_web::http::StatusCode;
use thiserror::Error;

/// 검증 실패 분류
///
/// 사용자 요청 검증 파이프라인이 내보낼 수 있는 실패 종류의 전체 목록입니다.
/// 와이어 코드(`code()`)는 기존 클라이언트와의 계약이므로 변경하지 않습니다.
/// (`TEXT_TO_LONG`의 철자도 계약의 일부입니다.)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    /// 필수 텍스트 입력이 비어 있음 (400)
    FormEmpty,
    /// username/password/email/bio 가 255자를 초과함 (400)
    TextToLong,
    /// 이메일 패턴 불일치 (400)
    EmailFormatError,
    /// 인증 정보가 필요한데 없음 (401)
    TokenInvalid,
    /// 권한 부족 또는 자기 자신 삭제 시도 (403)
    PermissionDenied,
    /// 생성 요청의 이메일이 이미 존재함 (409)
    EmailExist,
    /// 삭제 대상 사용자가 존재하지 않음 (404)
    UserNotFound,
    /// 조회 대상도 인증 정보도 없음 (400)
    ParameterError,
}

impl ValidationKind {
    /// 클라이언트에 노출되는 와이어 코드
    pub fn code(&self) -> &'static str {
        match self {
            ValidationKind::FormEmpty => "FORM_EMPTY",
            ValidationKind::TextToLong => "TEXT_TO_LONG",
            ValidationKind::EmailFormatError => "EMAIL_FORMAT_ERROR",
            ValidationKind::TokenInvalid => "TOKEN_INVALID",
            ValidationKind::PermissionDenied => "PERMISSION_DENIED",
            ValidationKind::EmailExist => "EMAIL_EXIST",
            ValidationKind::UserNotFound => "USER_NOT_FOUND",
            ValidationKind::ParameterError => "PARAMETER_ERROR",
        }
    }

    /// 분류별 HTTP 상태 코드
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationKind::FormEmpty
            | ValidationKind::TextToLong
            | ValidationKind::EmailFormatError
            | ValidationKind::ParameterError => StatusCode::BAD_REQUEST,
            ValidationKind::TokenInvalid => StatusCode::UNAUTHORIZED,
            ValidationKind::PermissionDenied => StatusCode::FORBIDDEN,
            ValidationKind::EmailExist => StatusCode::CONFLICT,
            ValidationKind::UserNotFound => StatusCode::NOT_FOUND,
        }
    }

    /// 사용자에게 보여줄 메시지
    pub fn message(&self) -> &'static str {
        match self {
            ValidationKind::FormEmpty => "필수 입력값이 비어 있습니다",
            ValidationKind::TextToLong => "입력값이 255자를 초과했습니다",
            ValidationKind::EmailFormatError => "이메일 형식이 올바르지 않습니다",
            ValidationKind::TokenInvalid => "유효한 인증 토큰이 필요합니다",
            ValidationKind::PermissionDenied => "접근 권한이 부족합니다",
            ValidationKind::EmailExist => "이미 사용 중인 이메일입니다",
            ValidationKind::UserNotFound => "사용자를 찾을 수 없습니다",
            ValidationKind::ParameterError => "요청 파라미터가 올바르지 않습니다",
        }
    }
}

impl std::fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 검증 실패는 `Validation` 변형으로, 나머지 시스템 레벨 에러는
/// 별도 변형으로 표현됩니다. 전부 자동으로 HTTP 응답으로 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 요청 검증 실패 (상태 코드는 분류가 결정)
    #[error("{0}")]
    Validation(ValidationKind),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Redis 캐시 관련 에러 (500 Internal Server Error)
    #[error("Redis error: {0}")]
    RedisError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문의 `error` 필드에 들어가는 코드
    fn code(&self) -> &'static str {
        match self {
            AppError::Validation(kind) => kind.code(),
            AppError::DatabaseError(_) | AppError::RedisError(_) => "SERVICE_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ConflictError(_) => "CONFLICT",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<ValidationKind> for AppError {
    fn from(kind: ValidationKind) -> Self {
        AppError::Validation(kind)
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(kind) => kind.status_code(),
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 파이프라인 중단 시 클라이언트가 받는 유일한 형태:
    /// `{ "error": <코드>, "message": <메시지> }`
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.code(),
                "message": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_kind_status_codes() {
        assert_eq!(ValidationKind::FormEmpty.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ValidationKind::TextToLong.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ValidationKind::EmailFormatError.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ValidationKind::ParameterError.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ValidationKind::TokenInvalid.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(ValidationKind::PermissionDenied.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ValidationKind::EmailExist.status_code(), StatusCode::CONFLICT);
        assert_eq!(ValidationKind::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_kind_wire_codes() {
        // 기존 클라이언트와의 계약이므로 철자 그대로 고정
        assert_eq!(ValidationKind::TextToLong.code(), "TEXT_TO_LONG");
        assert_eq!(ValidationKind::FormEmpty.code(), "FORM_EMPTY");
        assert_eq!(ValidationKind::EmailExist.code(), "EMAIL_EXIST");
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::Validation(ValidationKind::PermissionDenied);
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_kind_converts_into_app_error() {
        let error: AppError = ValidationKind::EmailExist.into();
        assert!(matches!(error, AppError::Validation(ValidationKind::EmailExist)));
    }
}

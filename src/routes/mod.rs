//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자 관리 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::web;
use serde_json::json;

use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Routes
///
/// - `POST /api/v1/users` - 사용자 생성 (최초 가입 또는 관리자)
/// - `PATCH /api/v1/users` - 본인 프로필 부분 수정
/// - `DELETE /api/v1/users/{uuid}` - 사용자 삭제 (관리자)
/// - `GET /api/v1/users` - 본인 상세 조회
/// - `GET /api/v1/users/{uuid}` - 사용자 상세 조회
///
/// 인증 판정은 라우트 수준이 아니라 각 연산의 검증기가 내립니다.
/// 같은 경로라도 상황에 따라 인증이 필요하거나 필요하지 않기 때문입니다.
/// (예: 최초 가입, 명시적 uuid 상세 조회)
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .service(handlers::users::create_user)
            .service(handlers::users::update_user)
            .service(handlers::users::get_my_detail)
            .service(handlers::users::remove_user)
            .service(handlers::users::get_user_detail),
    );
}

/// 헬스체크 엔드포인트
///
/// 로드밸런서와 모니터링 시스템이 서비스 상태를 확인할 때 사용합니다.
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check_returns_healthy() {
        let app = test::init_service(App::new().service(health_check)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp["status"], "healthy");
        assert_eq!(resp["service"], "user_service");
    }
}

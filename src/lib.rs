//! 사용자 관리 서비스 백엔드
//!
//! Rust 기반의 사용자 관리 서비스입니다. 요청 검증 파이프라인을 중심으로
//! 사용자 생성, 프로필 수정, 삭제, 상세 조회 API를 제공하며,
//! 싱글톤 매크로를 활용한 의존성 주입을 사용합니다.
//!
//! # Features
//!
//! - **요청 검증 파이프라인**: 연산별 검증기와 고정된 에러 분류 체계
//! - **사용자 관리**: 계정 생성(부트스트랩 포함), 프로필 수정, 삭제, 조회
//! - **싱글톤 DI**: 매크로 기반 자동 의존성 주입
//! - **MongoDB**: 사용자 데이터 영구 저장
//! - **Redis**: 읽기 캐싱
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
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   Validators    │ ← 요청 검증 파이프라인
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use user_service_backend::services::users::user_service::UserService;
//!
//! // 싱글톤 서비스 인스턴스 가져오기
//! let user_service = UserService::instance();
//! let detail = user_service.get_user_detail("some-uuid").await?;
//! ```

pub mod caching;
pub mod config;
pub mod core;
pub mod db;
pub mod domain;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;

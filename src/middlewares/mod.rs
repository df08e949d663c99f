//! 미들웨어 모듈
//!
//! 요청 처리 파이프라인에서 핸들러 본문보다 앞 단계에 위치하는
//! 횡단 관심사를 제공합니다.
//!
//! # 제공 기능
//!
//! ### 사용자 요청 검증 파이프라인 (user_validator)
//! - 생성/수정/삭제/상세조회 요청의 검증 규칙
//! - 고정된 에러 분류 체계와 검사 순서
//! - [`UserDirectory`](user_validator::UserDirectory)를 통한 저장소 조회

pub mod user_validator;

pub use user_validator::UserDirectory;

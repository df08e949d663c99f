//! 애플리케이션 핵심 인프라 모듈
//!
//! 에러 시스템과 싱글톤 DI 레지스트리를 제공합니다.

pub mod errors;
pub mod registry;

pub use errors::{AppError, AppResult, ValidationKind};

//! 사용자 도메인 모델 모듈

pub mod validated_request;

pub use validated_request::{ValidatedCreateRequest, ValidatedDetailRequest, ValidatedUpdateRequest};

//! 설정 관리 모듈
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//! 민감한 정보는 환경 변수로만 제공되며, 기본값은 개발 환경에서만 안전합니다.

pub mod data_config;

pub use data_config::*;

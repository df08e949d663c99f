//! 도메인 엔티티 모듈
//!
//! 영구 저장소에 저장되는 핵심 도메인 모델들을 정의합니다.

pub mod users;

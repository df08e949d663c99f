//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! `#[service]` 매크로를 사용하여 싱글톤으로 관리되는 서비스들을 제공합니다.
//! 검증 파이프라인을 통과한 요청만 이 계층에 도달합니다.

pub mod users;

//! 도메인 모델 모듈
//!
//! DTO와 달리 전송 경계가 아닌, 애플리케이션 내부에서 의미를 갖는 타입들입니다.

pub mod auth;
pub mod users;

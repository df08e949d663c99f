//! 데이터 전송 객체(DTO) 모듈
//!
//! HTTP 요청/응답 경계에서 사용하는 타입들을 정의합니다.

pub mod users;

//! 도메인 모듈
//!
//! 엔티티, 요청/응답 DTO, 도메인 모델을 정의합니다.

pub mod dto;
pub mod entities;
pub mod models;

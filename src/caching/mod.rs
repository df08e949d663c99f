//! 캐싱 레이어 모듈
//!
//! Redis 기반 읽기 캐시를 제공합니다.

pub mod redis;

pub use redis::RedisClient;

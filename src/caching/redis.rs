//! Redis 캐시 클라이언트 구현
//!
//! 리포지토리 계층의 읽기 성능 최적화를 위한 캐싱 레이어입니다.
//! Serde를 통한 투명한 JSON 직렬화와 비동기 처리를 지원하며,
//! 멀티플렉싱된 단일 연결에서 여러 동시 요청을 처리합니다.

use std::env;

use log::info;
use redis::{AsyncCommands, Client};
use serde::{de::DeserializeOwned, Serialize};

/// Redis 캐시 클라이언트 래퍼
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
}

impl RedisClient {
    /// 새 Redis 클라이언트 인스턴스를 생성합니다.
    ///
    /// `REDIS_URL` 환경 변수에서 서버 주소를 읽어오며(기본값:
    /// `redis://localhost:6379`), 생성 시 PING으로 가용성을 확인합니다.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let redis_url =
            env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        let client = Client::open(redis_url)?;

        // 연결 테스트
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        info!("Redis 연결 성공");

        Ok(Self { client })
    }

    /// 지정된 키의 값을 조회하고 역직렬화하여 반환합니다.
    ///
    /// 키가 존재하지 않으면 `Ok(None)`을 반환합니다.
    pub async fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<T>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;

        match value {
            Some(json) => match serde_json::from_str(&json) {
                Ok(parsed) => Ok(Some(parsed)),
                // 역직렬화 불가능한 캐시는 미스로 처리
                Err(_) => Ok(None),
            },
            None => Ok(None),
        }
    }

    /// 값을 JSON으로 직렬화하여 저장합니다 (만료 없음).
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "직렬화 실패", e.to_string()))
        })?;

        conn.set::<_, _, ()>(key, json).await
    }

    /// 값을 JSON으로 직렬화하여 TTL과 함께 저장합니다.
    pub async fn set_with_expiry<T: Serialize>(
        &self,
        key: &str,
        value: &T,
        seconds: usize,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let json = serde_json::to_string(value).map_err(|e| {
            redis::RedisError::from((redis::ErrorKind::TypeError, "직렬화 실패", e.to_string()))
        })?;

        conn.set_ex::<_, _, ()>(key, json, seconds as u64).await
    }

    /// 지정된 키를 삭제합니다.
    pub async fn del(&self, key: &str) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(key).await
    }

    /// 여러 키를 한 번에 삭제합니다.
    pub async fn del_multiple(&self, keys: &[String]) -> Result<(), redis::RedisError> {
        if keys.is_empty() {
            return Ok(());
        }

        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.del::<_, ()>(keys).await
    }

    /// 패턴에 매칭되는 키 목록을 조회합니다.
    ///
    /// 캐시 무효화 시 관련 키를 찾는 용도로만 사용합니다.
    pub async fn keys(&self, pattern: &str) -> Result<Vec<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.keys(pattern).await
    }
}

//! 사용자 엔티티 구현
//!
//! 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// MongoDB 내부 `_id`와 별도로, 외부에 노출되는 공개 식별자 `uuid`를 가집니다.
/// 모든 API 경로와 인증 컨텍스트는 `uuid`로 사용자를 지칭합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 공개 식별자 (UUID v4, unique)
    pub uuid: String,
    /// 사용자 이름 (빈 문자열 허용)
    pub username: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt로 해시된 비밀번호
    pub password_hash: String,
    /// 자기소개
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// 관리자 권한 여부 (최초 가입자는 true)
    pub is_admin: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// 공개 식별자(uuid)가 자동 할당되며, 생성/수정 시각이 현재로 설정됩니다.
    pub fn new(username: String, email: String, password_hash: String, is_admin: bool) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            uuid: Uuid::new_v4().to_string(),
            username,
            email,
            password_hash,
            bio: None,
            is_admin,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_gets_fresh_uuid() {
        let a = User::new("a".to_string(), "a@bc.de".to_string(), "hash".to_string(), false);
        let b = User::new("b".to_string(), "b@cd.ef".to_string(), "hash".to_string(), false);

        assert_ne!(a.uuid, b.uuid);
        assert!(Uuid::parse_str(&a.uuid).is_ok());
        assert!(a.id.is_none());
        assert!(a.bio.is_none());
    }
}

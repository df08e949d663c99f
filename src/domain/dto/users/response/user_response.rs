//! 사용자 응답 DTO
//!
//! 엔티티에서 민감 정보(비밀번호 해시, 내부 `_id`)를 제거한 공개 표현입니다.

use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::users::user::User;

/// 사용자 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub uuid: String,
    pub username: String,
    pub email: String,
    pub bio: Option<String>,
    pub is_admin: bool,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            uuid,
            username,
            email,
            bio,
            is_admin,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            uuid,
            username,
            email,
            bio,
            is_admin,
            created_at,
            updated_at,
        }
    }
}

/// 사용자 생성 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserResponse {
    pub user: UserResponse,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_drops_password_hash() {
        let user = User::new(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "$2b$04$hash".to_string(),
            true,
        );
        let uuid = user.uuid.clone();

        let response = UserResponse::from(user);

        assert_eq!(response.uuid, uuid);
        assert_eq!(response.username, "alice");
        assert!(response.is_admin);

        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("password_hash").is_none());
        assert!(json.get("_id").is_none());
    }
}

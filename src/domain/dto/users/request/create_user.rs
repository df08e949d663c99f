//! 사용자 생성 요청 DTO
//!
//! 전송 계층에서 들어오는 원시 입력입니다. 모든 필드는 누락될 수 있으며,
//! 신뢰되지 않습니다. 검증은 전적으로 검증 파이프라인이 수행합니다.

use serde::{Deserialize, Serialize};

/// 새로운 사용자 계정 생성을 위한 원시 요청
///
/// 누락된 필드는 접근자에서 빈 문자열로 기본 처리됩니다.
/// (원시 입력에는 기본값을 구조체 수준에서 정의하고,
/// "제공되었는지" 여부는 검증 규칙에 필요한 update 요청에서만 구분합니다.)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUserInput {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl CreateUserInput {
    /// 사용자 이름 (누락 시 빈 문자열)
    pub fn username(&self) -> &str {
        self.username.as_deref().unwrap_or("")
    }

    /// 이메일 (누락 시 빈 문자열)
    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    /// 비밀번호 (누락 시 빈 문자열)
    pub fn password(&self) -> &str {
        self.password.as_deref().unwrap_or("")
    }
}

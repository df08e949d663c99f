//! 검증 통과 요청 모델
//!
//! 검증 파이프라인의 출력 타입입니다. 이 타입들이 존재한다는 것은
//! 해당 요청이 모든 검증 규칙을 통과했다는 뜻이며, 서비스 레이어는
//! 이 타입들만 입력으로 받습니다.

use serde::{Deserialize, Serialize};

/// 검증을 통과한 사용자 생성 요청
///
/// `is_admin`은 검증 단계에서 확정됩니다. 최초 가입자는 관리자가 되고,
/// 그 외에는 관리자가 대신 생성한 일반 계정입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedCreateRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// 검증을 통과한 사용자 수정 요청
///
/// `None`인 필드는 수정 대상이 아닙니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatedUpdateRequest {
    pub username: Option<String>,
    pub bio: Option<String>,
}

impl ValidatedUpdateRequest {
    /// 수정할 필드가 하나라도 있는지 여부
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.bio.is_none()
    }
}

/// 검증을 통과한 사용자 조회 요청
///
/// `uuid`는 경로에서 왔거나, 경로가 비어 있을 때 호출자 본인의
/// 식별자로 대체된 값입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedDetailRequest {
    pub uuid: String,
}

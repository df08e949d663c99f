//! 사용자 수정 요청 DTO

use serde::{Deserialize, Serialize};

/// 사용자 프로필 부분 수정을 위한 원시 요청
///
/// 부분 수정 의미론을 위해 "키가 아예 없음"(`None`)과
/// "빈 값으로 제공됨"(`Some("")`)을 구분합니다. 제공되지 않은 필드는
/// 검증과 수정 대상에서 완전히 제외됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUserInput {
    pub username: Option<String>,
    pub bio: Option<String>,
}

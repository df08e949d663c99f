//! 사용자 관련 요청 DTO 모듈
//!
//! 전송 계층의 원시 입력을 구조화된 타입으로 변환합니다.
//! 여기서는 역직렬화만 담당하며, 검증 규칙은 전부
//! `middlewares::user_validator`의 검증 파이프라인에 있습니다.

pub mod create_user;
pub mod update_user;

pub use create_user::CreateUserInput;
pub use update_user::UpdateUserInput;

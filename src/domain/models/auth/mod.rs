//! 인증 컨텍스트 모델 모듈

pub mod identity;

pub use identity::{IdentityContext, MaybeIdentity};

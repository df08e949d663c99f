use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// 인증 레이어에서 확정된 호출자 정보
///
/// 토큰 검증을 통과한 요청에 한해 요청 확장(extensions)에 삽입됩니다.
/// 검증 파이프라인은 이 구조체의 존재 여부로 인증 상태를 판단합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityContext {
    /// 호출자의 공개 식별자 (UUID)
    pub uuid: String,

    /// 관리자 권한 여부
    pub is_admin: bool,
}

impl IdentityContext {
    pub fn new(uuid: impl Into<String>, is_admin: bool) -> Self {
        Self {
            uuid: uuid.into(),
            is_admin,
        }
    }
}

/// 선택적 호출자 추출자
///
/// 인증이 선행 조건이 아닌 엔드포인트에서 사용합니다. 인증 여부에 따른
/// 거부 판단은 추출 시점이 아니라 각 검증 규칙이 내립니다.
#[derive(Debug, Clone)]
pub struct MaybeIdentity(pub Option<IdentityContext>);

impl MaybeIdentity {
    pub fn as_ref(&self) -> Option<&IdentityContext> {
        self.0.as_ref()
    }

    pub fn into_inner(self) -> Option<IdentityContext> {
        self.0
    }
}

impl FromRequest for MaybeIdentity {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        let identity = req.extensions().get::<IdentityContext>().cloned();
        ready(Ok(MaybeIdentity(identity)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::test]
    async fn test_extracts_identity_from_extensions() {
        let req = TestRequest::default().to_http_request();
        req.extensions_mut()
            .insert(IdentityContext::new("uuid-1234", true));

        let identity = MaybeIdentity::extract(&req).await.unwrap();
        let inner = identity.into_inner().unwrap();

        assert_eq!(inner.uuid, "uuid-1234");
        assert!(inner.is_admin);
    }

    #[actix_web::test]
    async fn test_missing_identity_is_none_not_error() {
        let req = TestRequest::default().to_http_request();

        let identity = MaybeIdentity::extract(&req).await.unwrap();

        assert!(identity.as_ref().is_none());
    }
}

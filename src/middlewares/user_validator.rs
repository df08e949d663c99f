//! # 사용자 요청 검증 파이프라인
//!
//! 사용자 관리 API의 네 가지 연산(생성/수정/삭제/상세조회)에 대한 요청 검증을
//! 담당합니다. 각 검증기는 핸들러 본문보다 앞 단계에서 호출되며, 통과 시
//! 정규화된 검증 완료 요청을 반환하고 실패 시 분류된 에러로 파이프라인을
//! 중단시킵니다.
//!
//! ## 설계 원칙
//!
//! - 검증기는 명시적 인자만 받는 함수입니다. 요청 컨텍스트를 뒤지지 않고,
//!   호출자(핸들러)가 본문, 경로 파라미터, 인증 컨텍스트를 건네줍니다.
//! - 저장소 접근은 [`UserDirectory`] trait 뒤에서만 이루어집니다.
//!   실제 운영에서는 `UserService`가 구현하고, 테스트에서는 인메모리
//!   스텁으로 대체합니다.
//! - 첫 번째 실패가 전체 결과입니다. 검사 순서는 고정이며, 부분 성공이나
//!   에러 수집은 없습니다.
//! - 검증기는 쓰기를 하지 않습니다. 존재/중복 확인을 위한 읽기만 수행합니다.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    core::errors::{AppError, ValidationKind},
    domain::{
        dto::users::request::{CreateUserInput, UpdateUserInput},
        entities::users::user::User,
        models::{
            auth::IdentityContext,
            users::{ValidatedCreateRequest, ValidatedDetailRequest, ValidatedUpdateRequest},
        },
    },
};

/// 검증 파이프라인이 필요로 하는 사용자 저장소 조회 능력
///
/// 세 가지 읽기 연산만 노출합니다. 검증기는 이 trait을 통해서만
/// 저장소를 바라보며, 어떤 쓰기도 수행하지 않습니다.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// 전체 사용자 수 (부트스트랩 판정용)
    async fn count(&self) -> Result<u64, AppError>;

    /// 이메일로 사용자 조회 (중복 판정용)
    async fn find_one_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// 공개 식별자로 사용자 조회 (존재 판정용)
    async fn find_one_by_uuid(&self, uuid: &str) -> Result<Option<User>, AppError>;
}

/// 이메일 형식 패턴
///
/// TLD 구분자 자리의 `.`은 의도적으로 이스케이프하지 않았습니다.
/// 임의의 한 문자를 허용하는 느슨한 패턴이며, 기존 클라이언트와의
/// 계약이므로 그대로 유지합니다. (`a@bc.de` 통과, `a@bXd`도 통과,
/// `a@@b`, `abc`는 거부)
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9]+@[a-zA-Z]+.[a-zA-Z]+$")
        .unwrap_or_else(|e| panic!("이메일 패턴 컴파일 실패: {}", e))
});

/// 입력 길이 상한 (username/password/email/bio 공통)
const MAX_FIELD_LENGTH: usize = 255;

/// 255자 초과 여부 (문자 단위, 바이트 아님)
fn exceeds_max_length(value: &str) -> bool {
    value.chars().count() > MAX_FIELD_LENGTH
}

/// 사용자 생성 요청 검증
///
/// 검사 순서 (첫 실패가 결과):
///
/// 1. email 또는 password가 공백 제거 후 비어 있음 → `FORM_EMPTY`
/// 2. username/password/email 중 하나라도 255자 초과 → `TEXT_TO_LONG`
/// 3. email이 패턴 불일치 → `EMAIL_FORMAT_ERROR`
/// 4. 권한 판정:
///    - 사용자 수가 0이면(최초 가입) 인증 없이 통과하며 관리자가 됩니다.
///    - 그 외에는 인증 필수(`TOKEN_INVALID`), 관리자 권한 필수
///      (`PERMISSION_DENIED`)이고 새 계정은 일반 사용자입니다.
/// 5. 이메일이 이미 존재 → `EMAIL_EXIST`
///
/// username은 비어 있어도 됩니다. 공백 제거는 판정에만 쓰이고,
/// 통과한 값은 원본 그대로 전달됩니다.
pub async fn validate_user_create_request(
    input: CreateUserInput,
    identity: Option<&IdentityContext>,
    directory: &impl UserDirectory,
) -> Result<ValidatedCreateRequest, AppError> {
    let username = input.username();
    let email = input.email();
    let password = input.password();

    if email.trim().is_empty() || password.trim().is_empty() {
        return Err(ValidationKind::FormEmpty.into());
    }

    if exceeds_max_length(username) || exceeds_max_length(password) || exceeds_max_length(email) {
        return Err(ValidationKind::TextToLong.into());
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(ValidationKind::EmailFormatError.into());
    }

    // 최초 가입자는 관리자. 이후에는 관리자만 계정을 만들 수 있습니다.
    let is_admin = if directory.count().await? == 0 {
        true
    } else {
        let caller = identity.ok_or(ValidationKind::TokenInvalid)?;
        if !caller.is_admin {
            return Err(ValidationKind::PermissionDenied.into());
        }
        false
    };

    if directory.find_one_by_email(email).await?.is_some() {
        return Err(ValidationKind::EmailExist.into());
    }

    Ok(ValidatedCreateRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
        is_admin,
    })
}

/// 사용자 수정 요청 검증
///
/// 인증된 호출자만 허용합니다(`TOKEN_INVALID`). 본문에 제공된 필드만
/// 길이를 검사하고(초과 시 `TEXT_TO_LONG`) 출력에 포함합니다.
/// 제공되지 않은 필드는 검사도 수정도 하지 않습니다. 빈 문자열은
/// "비우기"라는 유효한 수정입니다.
///
/// 소유권/역할 검사는 하지 않습니다. 어떤 사용자를 수정할지는
/// 호출자 본인의 식별자로 핸들러가 결정합니다.
pub fn validate_user_update_request(
    input: UpdateUserInput,
    identity: Option<&IdentityContext>,
) -> Result<ValidatedUpdateRequest, AppError> {
    if identity.is_none() {
        return Err(ValidationKind::TokenInvalid.into());
    }

    let mut validated = ValidatedUpdateRequest::default();

    if let Some(username) = input.username {
        if exceeds_max_length(&username) {
            return Err(ValidationKind::TextToLong.into());
        }
        validated.username = Some(username);
    }

    if let Some(bio) = input.bio {
        if exceeds_max_length(&bio) {
            return Err(ValidationKind::TextToLong.into());
        }
        validated.bio = Some(bio);
    }

    Ok(validated)
}

/// 사용자 삭제 요청 검증
///
/// 검사 순서:
///
/// 1. 인증 필수 → `TOKEN_INVALID`
/// 2. 관리자 권한 필수 → `PERMISSION_DENIED`
/// 3. 자기 자신 삭제 금지 (관리자라도) → `PERMISSION_DENIED`
/// 4. 대상이 존재하지 않음 → `USER_NOT_FOUND`
///
/// 통과 시 반환값은 없습니다. 경로의 uuid가 그대로 삭제 대상입니다.
pub async fn validate_user_remove_request(
    uuid: &str,
    identity: Option<&IdentityContext>,
    directory: &impl UserDirectory,
) -> Result<(), AppError> {
    let caller = identity.ok_or(ValidationKind::TokenInvalid)?;

    if !caller.is_admin {
        return Err(ValidationKind::PermissionDenied.into());
    }

    // 마지막 관리자가 스스로를 지우는 사고를 막는 가드
    if caller.uuid == uuid {
        return Err(ValidationKind::PermissionDenied.into());
    }

    if directory.find_one_by_uuid(uuid).await?.is_none() {
        return Err(ValidationKind::UserNotFound.into());
    }

    Ok(())
}

/// 사용자 상세 조회 요청 검증
///
/// 경로의 uuid가 비어 있으면(공백 제거 후) 호출자 본인의 uuid로
/// 대체합니다. 이때 인증 정보도 없으면 `PARAMETER_ERROR`입니다.
/// 비어 있지 않은 uuid는 인증 없이 그대로 사용됩니다. 조회 대상의
/// 존재 여부와 필드 노출 범위는 이후 단계의 책임입니다.
pub fn validate_user_detail_request(
    uuid: &str,
    identity: Option<&IdentityContext>,
) -> Result<ValidatedDetailRequest, AppError> {
    let uuid = if uuid.trim().is_empty() {
        identity
            .ok_or(ValidationKind::ParameterError)?
            .uuid
            .clone()
    } else {
        uuid.to_string()
    };

    Ok(ValidatedDetailRequest { uuid })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 인메모리 저장소 스텁
    struct StubDirectory {
        users: Vec<User>,
    }

    impl StubDirectory {
        fn empty() -> Self {
            Self { users: Vec::new() }
        }

        fn with_users(users: Vec<User>) -> Self {
            Self { users }
        }
    }

    #[async_trait]
    impl UserDirectory for StubDirectory {
        async fn count(&self) -> Result<u64, AppError> {
            Ok(self.users.len() as u64)
        }

        async fn find_one_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
            Ok(self.users.iter().find(|u| u.email == email).cloned())
        }

        async fn find_one_by_uuid(&self, uuid: &str) -> Result<Option<User>, AppError> {
            Ok(self.users.iter().find(|u| u.uuid == uuid).cloned())
        }
    }

    fn existing_user(email: &str) -> User {
        User::new(
            "existing".to_string(),
            email.to_string(),
            "$2b$04$hash".to_string(),
            false,
        )
    }

    fn admin_identity() -> IdentityContext {
        IdentityContext::new("admin-uuid", true)
    }

    fn member_identity() -> IdentityContext {
        IdentityContext::new("member-uuid", false)
    }

    fn create_input(username: &str, email: &str, password: &str) -> CreateUserInput {
        CreateUserInput {
            username: Some(username.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
        }
    }

    fn kind_of(result: Result<impl std::fmt::Debug, AppError>) -> ValidationKind {
        match result {
            Err(AppError::Validation(kind)) => kind,
            other => panic!("검증 실패를 기대했으나: {:?}", other.map(|_| ())),
        }
    }

    // ---- create ----

    #[actix_web::test]
    async fn test_create_first_user_becomes_admin_without_identity() {
        let directory = StubDirectory::empty();
        let input = create_input("alice", "alice@example.com", "secret");

        let validated = validate_user_create_request(input, None, &directory)
            .await
            .unwrap();

        assert!(validated.is_admin);
        assert_eq!(validated.email, "alice@example.com");
        assert_eq!(validated.username, "alice");
    }

    #[actix_web::test]
    async fn test_create_empty_email_or_password_is_form_empty() {
        let directory = StubDirectory::empty();

        let missing_email = CreateUserInput {
            username: Some("a".to_string()),
            email: None,
            password: Some("pw".to_string()),
        };
        let result = validate_user_create_request(missing_email, None, &directory).await;
        assert_eq!(kind_of(result), ValidationKind::FormEmpty);

        // 공백만 있는 비밀번호도 비어 있는 것으로 취급
        let blank_password = create_input("a", "a@bc.de", "   ");
        let result = validate_user_create_request(blank_password, None, &directory).await;
        assert_eq!(kind_of(result), ValidationKind::FormEmpty);
    }

    #[actix_web::test]
    async fn test_create_empty_username_is_allowed() {
        let directory = StubDirectory::empty();
        let input = create_input("", "a@bc.de", "pw");

        let validated = validate_user_create_request(input, None, &directory)
            .await
            .unwrap();

        assert_eq!(validated.username, "");
    }

    #[actix_web::test]
    async fn test_create_overlong_field_is_text_to_long() {
        let directory = StubDirectory::empty();
        let long = "x".repeat(256);

        let result =
            validate_user_create_request(create_input(&long, "a@bc.de", "pw"), None, &directory)
                .await;
        assert_eq!(kind_of(result), ValidationKind::TextToLong);

        // 정확히 255자는 통과
        let edge = "x".repeat(255);
        assert!(
            validate_user_create_request(create_input(&edge, "a@bc.de", "pw"), None, &directory)
                .await
                .is_ok()
        );
    }

    #[actix_web::test]
    async fn test_create_length_counts_chars_not_bytes() {
        let directory = StubDirectory::empty();
        // 한글 255자는 바이트로는 765이지만 문자 수로는 통과
        let hangul = "가".repeat(255);

        let validated =
            validate_user_create_request(create_input(&hangul, "a@bc.de", "pw"), None, &directory)
                .await
                .unwrap();

        assert_eq!(validated.username.chars().count(), 255);
    }

    #[actix_web::test]
    async fn test_create_email_format_check() {
        let directory = StubDirectory::empty();

        for bad in ["a@@b", "abc", "a@b", "@bc.de", "a b@cd.ef"] {
            let result =
                validate_user_create_request(create_input("u", bad, "pw"), None, &directory).await;
            assert_eq!(kind_of(result), ValidationKind::EmailFormatError, "{}", bad);
        }

        assert!(
            validate_user_create_request(create_input("u", "a@bc.de", "pw"), None, &directory)
                .await
                .is_ok()
        );
    }

    #[actix_web::test]
    async fn test_create_lax_pattern_accepts_wildcard_separator() {
        // 패턴의 TLD 구분자가 이스케이프되지 않은 현행 동작의 고정
        let directory = StubDirectory::empty();

        let validated =
            validate_user_create_request(create_input("u", "a@bXd", "pw"), None, &directory)
                .await
                .unwrap();

        assert_eq!(validated.email, "a@bXd");
    }

    #[actix_web::test]
    async fn test_create_nonempty_directory_requires_identity() {
        let directory = StubDirectory::with_users(vec![existing_user("first@bc.de")]);
        let input = create_input("u", "new@bc.de", "pw");

        let result = validate_user_create_request(input, None, &directory).await;

        assert_eq!(kind_of(result), ValidationKind::TokenInvalid);
    }

    #[actix_web::test]
    async fn test_create_nonadmin_caller_is_denied() {
        let directory = StubDirectory::with_users(vec![existing_user("first@bc.de")]);
        let identity = member_identity();
        let input = create_input("u", "new@bc.de", "pw");

        let result = validate_user_create_request(input, Some(&identity), &directory).await;

        assert_eq!(kind_of(result), ValidationKind::PermissionDenied);
    }

    #[actix_web::test]
    async fn test_create_by_admin_yields_regular_account() {
        let directory = StubDirectory::with_users(vec![existing_user("first@bc.de")]);
        let identity = admin_identity();
        let input = create_input("u", "new@bc.de", "pw");

        let validated = validate_user_create_request(input, Some(&identity), &directory)
            .await
            .unwrap();

        assert!(!validated.is_admin);
    }

    #[actix_web::test]
    async fn test_create_duplicate_email_is_email_exist() {
        let directory = StubDirectory::with_users(vec![existing_user("dup@bc.de")]);
        let identity = admin_identity();
        let input = create_input("u", "dup@bc.de", "pw");

        let result = validate_user_create_request(input, Some(&identity), &directory).await;

        assert_eq!(kind_of(result), ValidationKind::EmailExist);
    }

    #[actix_web::test]
    async fn test_create_check_order_form_empty_before_length() {
        // email이 비어 있으면 password가 아무리 길어도 FORM_EMPTY가 우선
        let directory = StubDirectory::empty();
        let input = CreateUserInput {
            username: None,
            email: Some("".to_string()),
            password: Some("x".repeat(300)),
        };

        let result = validate_user_create_request(input, None, &directory).await;

        assert_eq!(kind_of(result), ValidationKind::FormEmpty);
    }

    #[actix_web::test]
    async fn test_create_check_order_format_before_permission() {
        // 형식 검사가 권한 판정보다 먼저 (인증 없는 빈 저장소가 아니어도)
        let directory = StubDirectory::with_users(vec![existing_user("first@bc.de")]);
        let input = create_input("u", "not-an-email", "pw");

        let result = validate_user_create_request(input, None, &directory).await;

        assert_eq!(kind_of(result), ValidationKind::EmailFormatError);
    }

    // ---- update ----

    #[test]
    fn test_update_requires_identity() {
        let input = UpdateUserInput {
            username: Some("new".to_string()),
            bio: None,
        };

        let result = validate_user_update_request(input, None);

        assert_eq!(kind_of(result), ValidationKind::TokenInvalid);
    }

    #[test]
    fn test_update_only_supplied_fields_are_included() {
        let identity = member_identity();
        let input = UpdateUserInput {
            username: None,
            bio: Some("안녕하세요".to_string()),
        };

        let validated = validate_user_update_request(input, Some(&identity)).unwrap();

        assert!(validated.username.is_none());
        assert_eq!(validated.bio.as_deref(), Some("안녕하세요"));
    }

    #[test]
    fn test_update_empty_string_is_a_valid_update() {
        // 빈 문자열 제공은 "비우기"이지 "미제공"이 아님
        let identity = member_identity();
        let input = UpdateUserInput {
            username: Some("".to_string()),
            bio: None,
        };

        let validated = validate_user_update_request(input, Some(&identity)).unwrap();

        assert_eq!(validated.username.as_deref(), Some(""));
    }

    #[test]
    fn test_update_overlong_supplied_field_is_text_to_long() {
        let identity = member_identity();
        let input = UpdateUserInput {
            username: None,
            bio: Some("x".repeat(256)),
        };

        let result = validate_user_update_request(input, Some(&identity));

        assert_eq!(kind_of(result), ValidationKind::TextToLong);
    }

    #[test]
    fn test_update_with_no_fields_passes_empty() {
        let identity = member_identity();

        let validated =
            validate_user_update_request(UpdateUserInput::default(), Some(&identity)).unwrap();

        assert!(validated.is_empty());
    }

    // ---- remove ----

    #[actix_web::test]
    async fn test_remove_requires_identity_then_admin() {
        let directory = StubDirectory::with_users(vec![existing_user("t@bc.de")]);
        let target = directory.users[0].uuid.clone();

        let result = validate_user_remove_request(&target, None, &directory).await;
        assert_eq!(kind_of(result), ValidationKind::TokenInvalid);

        let member = member_identity();
        let result = validate_user_remove_request(&target, Some(&member), &directory).await;
        assert_eq!(kind_of(result), ValidationKind::PermissionDenied);
    }

    #[actix_web::test]
    async fn test_remove_self_removal_denied_even_for_admin() {
        let admin = admin_identity();
        let directory = StubDirectory::with_users(vec![existing_user("t@bc.de")]);

        let result = validate_user_remove_request(&admin.uuid, Some(&admin), &directory).await;

        assert_eq!(kind_of(result), ValidationKind::PermissionDenied);
    }

    #[actix_web::test]
    async fn test_remove_missing_target_is_user_not_found() {
        let admin = admin_identity();
        let directory = StubDirectory::with_users(vec![existing_user("t@bc.de")]);

        let result = validate_user_remove_request("no-such-uuid", Some(&admin), &directory).await;

        assert_eq!(kind_of(result), ValidationKind::UserNotFound);
    }

    #[actix_web::test]
    async fn test_remove_admin_removing_other_user_passes() {
        let admin = admin_identity();
        let directory = StubDirectory::with_users(vec![existing_user("t@bc.de")]);
        let target = directory.users[0].uuid.clone();

        assert!(
            validate_user_remove_request(&target, Some(&admin), &directory)
                .await
                .is_ok()
        );
    }

    #[actix_web::test]
    async fn test_remove_self_guard_precedes_existence_check() {
        // 자기 자신의 uuid는 저장소에 없어도 PERMISSION_DENIED가 먼저
        let admin = admin_identity();
        let directory = StubDirectory::empty();

        let result = validate_user_remove_request(&admin.uuid, Some(&admin), &directory).await;

        assert_eq!(kind_of(result), ValidationKind::PermissionDenied);
    }

    // ---- detail ----

    #[test]
    fn test_detail_explicit_uuid_needs_no_identity() {
        let validated = validate_user_detail_request("some-uuid", None).unwrap();

        assert_eq!(validated.uuid, "some-uuid");
    }

    #[test]
    fn test_detail_empty_uuid_falls_back_to_caller() {
        let identity = member_identity();

        let validated = validate_user_detail_request("", Some(&identity)).unwrap();
        assert_eq!(validated.uuid, "member-uuid");

        // 공백뿐인 uuid도 비어 있는 것으로 취급
        let validated = validate_user_detail_request("   ", Some(&identity)).unwrap();
        assert_eq!(validated.uuid, "member-uuid");
    }

    #[test]
    fn test_detail_no_uuid_and_no_identity_is_parameter_error() {
        let result = validate_user_detail_request("", None);

        assert_eq!(kind_of(result), ValidationKind::ParameterError);
    }
}

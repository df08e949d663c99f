//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 이 계층에 도달하는 요청은 전부 검증 파이프라인을 통과한 상태이므로,
//! 여기서는 입력 재검증 없이 저장과 변환만 수행합니다.
//!
//! ## 보안 설계
//!
//! - **bcrypt 해싱**: 환경별 cost 설정으로 보안 강도 조절
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외

use std::sync::Arc;

use async_trait::async_trait;
use bcrypt::hash;
use mongodb::bson::{doc, DateTime};
use singleton_macro::service;

use crate::{
    config::PasswordConfig,
    core::errors::{AppError, ValidationKind},
    domain::{
        dto::users::response::{CreateUserResponse, UserResponse},
        entities::users::user::User,
        models::users::{ValidatedCreateRequest, ValidatedUpdateRequest},
    },
    middlewares::user_validator::UserDirectory,
    repositories::users::user_repo::UserRepository,
};

/// 사용자 관리 비즈니스 로직 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리되며,
/// UserRepository가 자동으로 주입됩니다.
///
/// 검증 파이프라인이 필요로 하는 저장소 조회([`UserDirectory`])도
/// 이 서비스가 제공합니다.
#[service(name = "user")]
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리 (자동 주입)
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 사용자 계정 생성
    ///
    /// 비밀번호를 bcrypt로 해싱한 뒤 저장합니다. 검증 단계에서 확정된
    /// `is_admin` 플래그를 그대로 사용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(CreateUserResponse)` - 생성된 사용자 정보와 성공 메시지
    /// * `Err(AppError::ConflictError)` - 이메일 중복 (검증과 저장 사이의 경합)
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    pub async fn create_user(
        &self,
        request: ValidatedCreateRequest,
    ) -> Result<CreateUserResponse, AppError> {
        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&request.password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new(
            request.username,
            request.email,
            password_hash,
            request.is_admin,
        );

        let created_user = self.user_repo.create(user).await?;
        log::info!("사용자 생성 완료: {}", created_user.uuid);

        Ok(CreateUserResponse {
            user: UserResponse::from(created_user),
            message: "사용자가 성공적으로 생성되었습니다".to_string(),
        })
    }

    /// 사용자 프로필 부분 수정
    ///
    /// `None`인 필드는 건드리지 않고, 제공된 필드만 `$set`으로 변경합니다.
    /// 수정할 필드가 하나도 없으면 현재 상태를 그대로 반환합니다.
    pub async fn update_user(
        &self,
        uuid: &str,
        request: ValidatedUpdateRequest,
    ) -> Result<UserResponse, AppError> {
        if request.is_empty() {
            return self.get_user_detail(uuid).await;
        }

        let mut update_doc = doc! { "updated_at": DateTime::now() };
        if let Some(username) = request.username {
            update_doc.insert("username", username);
        }
        if let Some(bio) = request.bio {
            update_doc.insert("bio", bio);
        }

        let updated = self
            .user_repo
            .update(uuid, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        log::info!("사용자 수정 완료: {}", uuid);

        Ok(UserResponse::from(updated))
    }

    /// 사용자 계정 삭제
    ///
    /// 존재 여부는 검증 단계에서 확인되지만, 검증과 삭제 사이에
    /// 삭제된 경우에도 404로 응답합니다.
    pub async fn remove_user(&self, uuid: &str) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(uuid).await?;

        if !deleted {
            return Err(AppError::Validation(ValidationKind::UserNotFound));
        }

        log::info!("사용자 삭제 완료: {}", uuid);
        Ok(())
    }

    /// 공개 식별자로 사용자 상세 조회
    ///
    /// 민감 정보가 제거된 DTO 형태로 반환합니다.
    pub async fn get_user_detail(&self, uuid: &str) -> Result<UserResponse, AppError> {
        let user = self
            .user_repo
            .find_by_uuid(uuid)
            .await?
            .ok_or_else(|| AppError::Validation(ValidationKind::UserNotFound))?;

        Ok(UserResponse::from(user))
    }
}

/// 검증 파이프라인용 저장소 조회 구현
///
/// 검증기는 이 trait 뒤에서만 저장소를 바라봅니다.
#[async_trait]
impl UserDirectory for UserService {
    async fn count(&self) -> Result<u64, AppError> {
        self.user_repo.count().await
    }

    async fn find_one_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_email(email).await
    }

    async fn find_one_by_uuid(&self, uuid: &str) -> Result<Option<User>, AppError> {
        self.user_repo.find_by_uuid(uuid).await
    }
}

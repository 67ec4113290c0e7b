use crate::{
    abstract_trait::{
        DynHashing, DynJwtService, DynTokenService, DynUserCommandRepository,
        DynUserQueryRepository, IdentityServiceTrait,
    },
    domain::{
        requests::{UpdateProfileRequest, UpdateUserData},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct IdentityService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
    jwt: DynJwtService,
    token: DynTokenService,
}

impl IdentityService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
        jwt: DynJwtService,
        token: DynTokenService,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
            jwt,
            token,
        }
    }
}

#[async_trait]
impl IdentityServiceTrait for IdentityService {
    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError> {
        info!("🔍 Fetching profile for user: {user_id}");

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            "Profile retrieved successfully",
            UserResponse::from(user),
        ))
    }

    async fn update_me(
        &self,
        user_id: i32,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        request.validate()?;

        info!("📝 Updating profile for user: {user_id}");

        if let Some(email) = &request.email
            && let Some(existing) = self.query.find_by_email(email).await?
            && existing.user_id != user_id
        {
            return Err(RepositoryError::AlreadyExists("Email already registered".into()).into());
        }

        if let Some(username) = &request.username
            && let Some(existing) = self.query.find_by_username(username).await?
            && existing.user_id != user_id
        {
            return Err(RepositoryError::AlreadyExists("Username already taken".into()).into());
        }

        let password = match &request.password {
            Some(raw) => Some(self.hashing.hash_password(raw).await?),
            None => None,
        };

        let user = self
            .command
            .update_user(&UpdateUserData {
                user_id,
                email: request.email.clone(),
                username: request.username.clone(),
                full_name: request.full_name.clone(),
                password,
            })
            .await?;

        info!("✅ Profile updated for user: {user_id}");

        Ok(ApiResponse::success(
            "Profile updated successfully",
            UserResponse::from(user),
        ))
    }

    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        let user_id = self.jwt.verify_token(refresh_token, "refresh")? as i32;

        let user = self
            .query
            .find_by_id(user_id)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        if !user.is_active {
            return Err(ServiceError::Forbidden("Account is deactivated".into()));
        }

        let access_token = self.token.create_access_token(user.user_id).await?;
        let refresh_token = self.token.create_refresh_token(user.user_id).await?;

        info!("✅ Tokens refreshed for user: {user_id}");

        Ok(ApiResponse::success(
            "Token refreshed successfully",
            TokenResponse {
                access_token,
                refresh_token,
            },
        ))
    }
}

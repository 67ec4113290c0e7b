use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest, UpdateProfileRequest},
        responses::{ApiResponse, TokenResponse, UserResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;
pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;
pub type DynIdentityService = Arc<dyn IdentityServiceTrait + Send + Sync>;
pub type DynTokenService = Arc<dyn TokenServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
}

#[async_trait]
pub trait LoginServiceTrait {
    async fn login(&self, request: &LoginRequest)
    -> Result<ApiResponse<TokenResponse>, ServiceError>;
}

#[async_trait]
pub trait IdentityServiceTrait {
    async fn get_me(&self, user_id: i32) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn update_me(
        &self,
        user_id: i32,
        request: &UpdateProfileRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError>;
    async fn refresh_token(
        &self,
        refresh_token: &str,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError>;
}

#[async_trait]
pub trait TokenServiceTrait {
    async fn create_access_token(&self, user_id: i32) -> Result<String, ServiceError>;
    async fn create_refresh_token(&self, user_id: i32) -> Result<String, ServiceError>;
}

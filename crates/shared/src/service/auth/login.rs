use crate::{
    abstract_trait::{DynHashing, DynTokenService, DynUserQueryRepository, LoginServiceTrait},
    domain::{
        requests::LoginRequest,
        responses::{ApiResponse, TokenResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct LoginService {
    query: DynUserQueryRepository,
    hashing: DynHashing,
    token: DynTokenService,
}

impl LoginService {
    pub fn new(query: DynUserQueryRepository, hashing: DynHashing, token: DynTokenService) -> Self {
        Self {
            query,
            hashing,
            token,
        }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(
        &self,
        request: &LoginRequest,
    ) -> Result<ApiResponse<TokenResponse>, ServiceError> {
        request.validate()?;

        info!("🔍 Login attempt for: {}", request.email);

        // An unknown email and a wrong password produce the same error, so
        // the endpoint cannot be used to probe for accounts.
        let user = self
            .query
            .find_by_email(&request.email)
            .await?
            .ok_or(ServiceError::InvalidCredentials)?;

        self.hashing
            .compare_password(&user.password, &request.password)
            .await?;

        if !user.is_active {
            return Err(ServiceError::Forbidden("Account is deactivated".into()));
        }

        let access_token = self.token.create_access_token(user.user_id).await?;
        let refresh_token = self.token.create_refresh_token(user.user_id).await?;

        info!("✅ User logged in: {}", user.user_id);

        Ok(ApiResponse::success(
            "Login successful",
            TokenResponse {
                access_token,
                refresh_token,
            },
        ))
    }
}

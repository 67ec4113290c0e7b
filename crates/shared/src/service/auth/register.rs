use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::{
        requests::{CreateUserData, RegisterRequest},
        responses::{ApiResponse, UserResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct RegisterService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hashing: DynHashing,
}

impl RegisterService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hashing: DynHashing,
    ) -> Self {
        Self {
            query,
            command,
            hashing,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(
        &self,
        request: &RegisterRequest,
    ) -> Result<ApiResponse<UserResponse>, ServiceError> {
        request.validate()?;

        info!("📝 Registering user: {}", request.username);

        if self.query.find_by_email(&request.email).await?.is_some() {
            return Err(RepositoryError::AlreadyExists("Email already registered".into()).into());
        }

        if self
            .query
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(RepositoryError::AlreadyExists("Username already taken".into()).into());
        }

        let hashed = self.hashing.hash_password(&request.password).await?;

        let user = self
            .command
            .create_user(&CreateUserData {
                email: request.email.clone(),
                username: request.username.clone(),
                password: hashed,
                full_name: request.full_name.clone(),
            })
            .await?;

        info!("✅ User registered: {}", user.user_id);

        Ok(ApiResponse::success(
            "User registered successfully",
            UserResponse::from(user),
        ))
    }
}

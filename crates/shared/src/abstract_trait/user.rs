use crate::{
    domain::requests::{CreateUserData, UpdateUserData},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;
pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepositoryError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, data: &CreateUserData) -> Result<User, RepositoryError>;
    async fn update_user(&self, data: &UpdateUserData) -> Result<User, RepositoryError>;
}

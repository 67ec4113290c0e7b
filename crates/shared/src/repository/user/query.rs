use crate::{
    abstract_trait::UserQueryRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserQueryRepository {
    db: ConnectionPool,
}

impl UserQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for UserQueryRepository {
    async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, RepositoryError> {
        info!("🔍 Fetching user by id: {user_id}");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, username, password, full_name, is_active, is_admin,
                   created_at, updated_at
            FROM users
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user {user_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        info!("🔍 Fetching user by email: {email}");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, username, password, full_name, is_active, is_admin,
                   created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user by email: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        info!("🔍 Fetching user by username: {username}");

        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, username, password, full_name, is_active, is_admin,
                   created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch user by username: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}

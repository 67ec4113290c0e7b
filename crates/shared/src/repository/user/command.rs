use crate::{
    abstract_trait::UserCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateUserData, UpdateUserData},
    errors::RepositoryError,
    model::User,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, data: &CreateUserData) -> Result<User, RepositoryError> {
        info!("📝 Creating user: {}", data.username);

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (email, username, password, full_name)
            VALUES ($1, $2, $3, $4)
            RETURNING user_id, email, username, password, full_name, is_active, is_admin,
                      created_at, updated_at
            "#,
        )
        .bind(&data.email)
        .bind(&data.username)
        .bind(&data.password)
        .bind(&data.full_name)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to create user: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("✅ User created with id: {}", user.user_id);
        Ok(user)
    }

    async fn update_user(&self, data: &UpdateUserData) -> Result<User, RepositoryError> {
        info!("📝 Updating user: {}", data.user_id);

        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET email = COALESCE($2, email),
                username = COALESCE($3, username),
                full_name = COALESCE($4, full_name),
                password = COALESCE($5, password),
                updated_at = NOW()
            WHERE user_id = $1
            RETURNING user_id, email, username, password, full_name, is_active, is_admin,
                      created_at, updated_at
            "#,
        )
        .bind(data.user_id)
        .bind(&data.email)
        .bind(&data.username)
        .bind(&data.full_name)
        .bind(&data.password)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to update user {}: {e:?}", data.user_id);
            RepositoryError::from(e)
        })?;

        Ok(user)
    }
}

use crate::{abstract_trait::HashingTrait, errors::ServiceError};
use async_trait::async_trait;
use bcrypt::{hash, verify};

#[derive(Clone)]
pub struct Hashing;

impl Hashing {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Hashing {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HashingTrait for Hashing {
    async fn hash_password(&self, password: &str) -> Result<String, ServiceError> {
        let hashed = hash(password, 4).map_err(ServiceError::Bcrypt)?;
        Ok(hashed)
    }

    async fn compare_password(
        &self,
        hashed_password: &str,
        password: &str,
    ) -> Result<(), ServiceError> {
        verify(password, hashed_password)
            .map_err(ServiceError::Bcrypt)
            .and_then(|is_valid| {
                if is_valid {
                    Ok(())
                } else {
                    Err(ServiceError::InvalidCredentials)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_compare_roundtrip() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("senha123").await.unwrap();

        assert_ne!(hashed, "senha123");
        assert!(hashing.compare_password(&hashed, "senha123").await.is_ok());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let hashing = Hashing::new();
        let hashed = hashing.hash_password("senha123").await.unwrap();

        let err = hashing
            .compare_password(&hashed, "other-password")
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidCredentials));
    }
}

use crate::{
    abstract_trait::{DynJwtService, TokenServiceTrait},
    errors::ServiceError,
};
use async_trait::async_trait;

#[derive(Clone)]
pub struct TokenService {
    jwt: DynJwtService,
}

impl TokenService {
    pub fn new(jwt: DynJwtService) -> Self {
        Self { jwt }
    }
}

#[async_trait]
impl TokenServiceTrait for TokenService {
    async fn create_access_token(&self, user_id: i32) -> Result<String, ServiceError> {
        self.jwt.generate_token(user_id as i64, "access")
    }

    async fn create_refresh_token(&self, user_id: i32) -> Result<String, ServiceError> {
        self.jwt.generate_token(user_id as i64, "refresh")
    }
}

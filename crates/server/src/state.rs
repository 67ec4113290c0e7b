use crate::di::DependenciesInject;
use anyhow::Result;
use shared::{
    abstract_trait::DynJwtService,
    config::{ConnectionPool, JwtConfig},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub jwt_config: DynJwtService,
    pub di_container: DependenciesInject,
}

impl AppState {
    pub fn new(pool: ConnectionPool, jwt_secret: &str) -> Result<Self> {
        let jwt_config = Arc::new(JwtConfig::new(jwt_secret)) as DynJwtService;

        let di_container = DependenciesInject::new(pool, jwt_config.clone());

        Ok(Self {
            jwt_config,
            di_container,
        })
    }
}

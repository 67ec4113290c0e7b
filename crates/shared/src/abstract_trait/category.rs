use crate::{
    domain::{
        requests::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest},
        responses::{ApiResponse, ApiResponsePagination, CategoryResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Category,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCategoryQueryRepository = Arc<dyn CategoryQueryRepositoryTrait + Send + Sync>;
pub type DynCategoryCommandRepository = Arc<dyn CategoryCommandRepositoryTrait + Send + Sync>;
pub type DynCategoryService = Arc<dyn CategoryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CategoryQueryRepositoryTrait {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<(Vec<Category>, i64), RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Category>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Option<Category>, RepositoryError>;
}

#[async_trait]
pub trait CategoryCommandRepositoryTrait {
    async fn create(&self, req: &CreateCategoryRequest) -> Result<Category, RepositoryError>;
    async fn update(&self, req: &UpdateCategoryRequest) -> Result<Category, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CategoryServiceTrait {
    async fn find_all(
        &self,
        req: &FindAllCategories,
    ) -> Result<ApiResponsePagination<Vec<CategoryResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateCategoryRequest,
    ) -> Result<ApiResponse<CategoryResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<(), ServiceError>;
}

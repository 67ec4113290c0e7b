use crate::{
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartItemResponse, CartResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Cart, CartItem},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCartQueryRepository = Arc<dyn CartQueryRepositoryTrait + Send + Sync>;
pub type DynCartCommandRepository = Arc<dyn CartCommandRepositoryTrait + Send + Sync>;
pub type DynCartService = Arc<dyn CartServiceTrait + Send + Sync>;

#[async_trait]
pub trait CartQueryRepositoryTrait {
    async fn find_by_user(&self, user_id: i32) -> Result<Option<Cart>, RepositoryError>;
    async fn find_items(&self, cart_id: i32) -> Result<Vec<CartItem>, RepositoryError>;
    async fn find_item_by_product(
        &self,
        cart_id: i32,
        product_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;
    async fn find_item_for_user(
        &self,
        cart_item_id: i32,
        user_id: i32,
    ) -> Result<Option<CartItem>, RepositoryError>;
}

#[async_trait]
pub trait CartCommandRepositoryTrait {
    async fn get_or_create(&self, user_id: i32) -> Result<Cart, RepositoryError>;
    async fn add_item(
        &self,
        cart_id: i32,
        product_id: i32,
        quantity: i32,
        price_at_time: f64,
    ) -> Result<CartItem, RepositoryError>;
    async fn update_item_quantity(
        &self,
        cart_item_id: i32,
        quantity: i32,
    ) -> Result<CartItem, RepositoryError>;
    async fn delete_item(&self, cart_item_id: i32) -> Result<(), RepositoryError>;
    async fn clear(&self, cart_id: i32) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait CartServiceTrait {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError>;
    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError>;
    async fn update_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError>;
    async fn remove_item(&self, user_id: i32, cart_item_id: i32) -> Result<(), ServiceError>;
    async fn clear(&self, user_id: i32) -> Result<(), ServiceError>;
}

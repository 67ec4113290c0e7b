use crate::{
    domain::{
        requests::{CreateOrderRequest, FindAllOrders, NewOrder, UpdateOrderStatusRequest},
        responses::{ApiResponse, ApiResponsePagination, OrderResponse, OrderStatusResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{Order, OrderItem},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;
pub type DynOrderCommandRepository = Arc<dyn OrderCommandRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_all_by_user(
        &self,
        user_id: i32,
        req: &FindAllOrders,
    ) -> Result<(Vec<Order>, i64), RepositoryError>;
    async fn find_by_id_for_user(
        &self,
        order_id: i32,
        user_id: i32,
    ) -> Result<Option<Order>, RepositoryError>;
    async fn find_items(&self, order_id: i32) -> Result<Vec<OrderItem>, RepositoryError>;
}

#[async_trait]
pub trait OrderCommandRepositoryTrait {
    /// Inserts the order and its items, decrements product stock and
    /// optionally clears the user's cart, all in one transaction.
    async fn create_order(
        &self,
        user_id: i32,
        order: &NewOrder,
    ) -> Result<(Order, Vec<OrderItem>), RepositoryError>;
    /// Marks the order cancelled and restores the stock of its items in one
    /// transaction.
    async fn cancel_order(&self, order_id: i32, user_id: i32) -> Result<Order, RepositoryError>;
    async fn update_status(
        &self,
        order_id: i32,
        user_id: i32,
        status: &str,
    ) -> Result<Order, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn create(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn cancel(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn get_status(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderStatusResponse>, ServiceError>;
    async fn update_status(
        &self,
        user_id: i32,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

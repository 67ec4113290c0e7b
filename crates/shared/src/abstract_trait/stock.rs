use crate::{
    domain::{
        requests::{CreateOrderRequest, StockValidationRequest},
        responses::{ApiResponse, OrderResponse, StockValidationResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStockService = Arc<dyn StockServiceTrait + Send + Sync>;

#[async_trait]
pub trait StockServiceTrait {
    async fn validate(
        &self,
        req: &StockValidationRequest,
    ) -> Result<ApiResponse<StockValidationResponse>, ServiceError>;
    /// Checkout trusts the unit prices supplied by the client and does not
    /// touch the cart, unlike order creation.
    async fn checkout(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
}

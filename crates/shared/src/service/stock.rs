use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynProductQueryRepository, StockServiceTrait,
    },
    domain::{
        requests::{
            CreateOrderRequest, NewOrder, NewOrderItem, OrderItemRequest, StockValidationRequest,
        },
        responses::{ApiResponse, OrderResponse, StockValidationResponse, UnavailableItem},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct StockService {
    products: DynProductQueryRepository,
    orders: DynOrderCommandRepository,
}

impl StockService {
    pub fn new(products: DynProductQueryRepository, orders: DynOrderCommandRepository) -> Self {
        Self { products, orders }
    }

    async fn check_items(
        &self,
        items: &[OrderItemRequest],
    ) -> Result<Vec<UnavailableItem>, ServiceError> {
        let mut unavailable = Vec::new();

        for item in items {
            match self.products.find_by_id(item.product_id).await? {
                None => unavailable.push(UnavailableItem {
                    product_id: item.product_id,
                    product_name: None,
                    requested_quantity: item.quantity,
                    available_quantity: 0,
                    reason: "Product not found".into(),
                }),
                Some(product) if !product.is_active => unavailable.push(UnavailableItem {
                    product_id: item.product_id,
                    product_name: Some(product.name),
                    requested_quantity: item.quantity,
                    available_quantity: 0,
                    reason: "Product is not available".into(),
                }),
                Some(product) if product.stock < item.quantity => {
                    unavailable.push(UnavailableItem {
                        product_id: item.product_id,
                        product_name: Some(product.name),
                        requested_quantity: item.quantity,
                        available_quantity: product.stock,
                        reason: format!("Insufficient stock. Available: {}", product.stock),
                    })
                }
                Some(_) => {}
            }
        }

        Ok(unavailable)
    }
}

#[async_trait]
impl StockServiceTrait for StockService {
    async fn validate(
        &self,
        req: &StockValidationRequest,
    ) -> Result<ApiResponse<StockValidationResponse>, ServiceError> {
        req.validate()?;

        info!("🔍 Validating stock for {} items", req.items.len());

        let unavailable = self.check_items(&req.items).await?;
        let report = StockValidationResponse::new(unavailable);

        Ok(ApiResponse::success("Stock validated", report))
    }

    async fn checkout(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        req.validate()?;

        info!("📝 Checkout for user {user_id} with {} items", req.items.len());

        let unavailable = self.check_items(&req.items).await?;
        if !unavailable.is_empty() {
            let report = serde_json::to_value(&unavailable)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            return Err(ServiceError::InsufficientStock(report));
        }

        // Checkout takes the client's unit prices as-is. The cart is left
        // untouched.
        let items: Vec<NewOrderItem> = req
            .items
            .iter()
            .map(|i| NewOrderItem {
                product_id: i.product_id,
                quantity: i.quantity,
                price: i.price,
            })
            .collect();
        let total_price = items.iter().map(|i| i.price * i.quantity as f64).sum();

        let (order, order_items) = self
            .orders
            .create_order(
                user_id,
                &NewOrder {
                    items,
                    total_price,
                    shipping_address: req.shipping_address.clone(),
                    payment_method: req.payment_method.clone(),
                    clear_cart: false,
                },
            )
            .await?;

        info!("✅ Checkout order {} created for user {user_id}", order.order_id);

        Ok(ApiResponse::success(
            "Checkout completed successfully",
            OrderResponse::from_parts(order, order_items),
        ))
    }
}

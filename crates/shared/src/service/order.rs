use crate::{
    abstract_trait::{
        DynOrderCommandRepository, DynOrderQueryRepository, DynProductQueryRepository,
        OrderServiceTrait,
    },
    domain::{
        requests::{
            CreateOrderRequest, FindAllOrders, NewOrder, NewOrderItem, UpdateOrderStatusRequest,
        },
        responses::{
            ApiResponse, ApiResponsePagination, OrderResponse, OrderStatusResponse, Pagination,
            UnavailableItem,
        },
    },
    errors::{RepositoryError, ServiceError},
    model::OrderStatus,
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct OrderService {
    query: DynOrderQueryRepository,
    command: DynOrderCommandRepository,
    products: DynProductQueryRepository,
}

impl OrderService {
    pub fn new(
        query: DynOrderQueryRepository,
        command: DynOrderCommandRepository,
        products: DynProductQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            products,
        }
    }

    /// Prices every requested item from the catalog, rejecting the whole
    /// order when any product is missing, inactive or short on stock.
    async fn price_items(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<Vec<NewOrderItem>, ServiceError> {
        let mut priced = Vec::with_capacity(req.items.len());
        let mut unavailable = Vec::new();

        for item in &req.items {
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
                Some(product) => priced.push(NewOrderItem {
                    product_id: item.product_id,
                    quantity: item.quantity,
                    price: product.price,
                }),
            }
        }

        if !unavailable.is_empty() {
            let report = serde_json::to_value(&unavailable)
                .map_err(|e| ServiceError::Internal(e.to_string()))?;
            return Err(ServiceError::InsufficientStock(report));
        }

        Ok(priced)
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn find_all(
        &self,
        user_id: i32,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>>, ServiceError> {
        let (orders, total) = self.query.find_all_by_user(user_id, req).await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            let items = self.query.find_items(order.order_id).await?;
            responses.push(OrderResponse::from_parts(order, items));
        }

        let (page_size, _) = req.limit_offset();

        Ok(ApiResponsePagination::success(
            "Orders retrieved successfully",
            responses,
            Pagination::new(req.page.max(1), page_size as i32, total),
        ))
    }

    async fn find_by_id(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id_for_user(order_id, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let items = self.query.find_items(order.order_id).await?;

        Ok(ApiResponse::success(
            "Order retrieved successfully",
            OrderResponse::from_parts(order, items),
        ))
    }

    async fn create(
        &self,
        user_id: i32,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        req.validate()?;

        info!("📝 Creating order for user {user_id}");

        // Client-supplied prices are ignored here; the catalog is the only
        // source of truth for order totals.
        let items = self.price_items(req).await?;
        let total_price = items.iter().map(|i| i.price * i.quantity as f64).sum();

        let (order, order_items) = self
            .command
            .create_order(
                user_id,
                &NewOrder {
                    items,
                    total_price,
                    shipping_address: req.shipping_address.clone(),
                    payment_method: req.payment_method.clone(),
                    clear_cart: true,
                },
            )
            .await?;

        info!("✅ Order {} created for user {user_id}", order.order_id);

        Ok(ApiResponse::success(
            "Order created successfully",
            OrderResponse::from_parts(order, order_items),
        ))
    }

    async fn cancel(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self.command.cancel_order(order_id, user_id).await?;
        let items = self.query.find_items(order.order_id).await?;

        info!("✅ Order {order_id} cancelled by user {user_id}");

        Ok(ApiResponse::success(
            "Order cancelled successfully",
            OrderResponse::from_parts(order, items),
        ))
    }

    async fn get_status(
        &self,
        user_id: i32,
        order_id: i32,
    ) -> Result<ApiResponse<OrderStatusResponse>, ServiceError> {
        let order = self
            .query
            .find_by_id_for_user(order_id, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        Ok(ApiResponse::success(
            "Order status retrieved successfully",
            OrderStatusResponse::from(order),
        ))
    }

    async fn update_status(
        &self,
        user_id: i32,
        order_id: i32,
        req: &UpdateOrderStatusRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        req.validate()?;

        let status = req
            .status
            .parse::<OrderStatus>()
            .map_err(|e| ServiceError::Validation(vec![e]))?;

        self.query
            .find_by_id_for_user(order_id, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        // Cancellation goes through the dedicated endpoint so that stock is
        // restored.
        if status == OrderStatus::Cancelled {
            return Err(ServiceError::Validation(vec![
                "Use the cancel endpoint to cancel an order".into(),
            ]));
        }

        let order = self
            .command
            .update_status(order_id, user_id, status.as_str())
            .await?;
        let items = self.query.find_items(order.order_id).await?;

        info!("✅ Order {order_id} status updated to {status}");

        Ok(ApiResponse::success(
            "Order status updated successfully",
            OrderResponse::from_parts(order, items),
        ))
    }
}

use crate::model::{Order, OrderItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderItemResponse {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
    pub subtotal: f64,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(value: OrderItem) -> Self {
        let subtotal = value.subtotal();

        OrderItemResponse {
            id: value.order_item_id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price: value.price,
            subtotal,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<OrderItemResponse>,
    pub total_price: f64,
    pub status: String,
    pub shipping_address: String,
    pub payment_method: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl OrderResponse {
    pub fn from_parts(order: Order, items: Vec<OrderItem>) -> Self {
        OrderResponse {
            id: order.order_id,
            user_id: order.user_id,
            items: items.into_iter().map(OrderItemResponse::from).collect(),
            total_price: order.total_price,
            status: order.status,
            shipping_address: order.shipping_address,
            payment_method: order.payment_method,
            created_at: order.created_at.map(|dt| dt.to_string()),
            updated_at: order.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderStatusResponse {
    pub order_id: i32,
    pub status: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Order> for OrderStatusResponse {
    fn from(value: Order) -> Self {
        OrderStatusResponse {
            order_id: value.order_id,
            status: value.status,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

use crate::model::{Cart, CartItem};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartItemResponse {
    pub id: i32,
    pub cart_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub price_at_time: f64,
    pub subtotal: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<CartItem> for CartItemResponse {
    fn from(value: CartItem) -> Self {
        let subtotal = value.subtotal();

        CartItemResponse {
            id: value.cart_item_id,
            cart_id: value.cart_id,
            product_id: value.product_id,
            quantity: value.quantity,
            price_at_time: value.price_at_time,
            subtotal,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct CartResponse {
    pub id: i32,
    pub user_id: i32,
    pub items: Vec<CartItemResponse>,
    pub total_price: f64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl CartResponse {
    pub fn from_parts(cart: Cart, items: Vec<CartItem>) -> Self {
        let total_price = items.iter().map(CartItem::subtotal).sum();

        CartResponse {
            id: cart.cart_id,
            user_id: cart.user_id,
            items: items.into_iter().map(CartItemResponse::from).collect(),
            total_price,
            created_at: cart.created_at.map(|dt| dt.to_string()),
            updated_at: cart.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cart_total_sums_item_subtotals() {
        let cart = Cart {
            cart_id: 1,
            user_id: 1,
            created_at: None,
            updated_at: None,
        };
        let items = vec![
            CartItem {
                cart_item_id: 1,
                cart_id: 1,
                product_id: 1,
                quantity: 2,
                price_at_time: 10.0,
                created_at: None,
                updated_at: None,
            },
            CartItem {
                cart_item_id: 2,
                cart_id: 1,
                product_id: 2,
                quantity: 1,
                price_at_time: 5.5,
                created_at: None,
                updated_at: None,
            },
        ];

        let response = CartResponse::from_parts(cart, items);

        assert!((response.total_price - 25.5).abs() < f64::EPSILON);
        assert_eq!(response.items.len(), 2);
        assert!((response.items[0].subtotal - 20.0).abs() < f64::EPSILON);
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllOrders {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl FindAllOrders {
    pub fn limit_offset(&self) -> (i64, i64) {
        let page_size = self.page_size.clamp(1, 100) as i64;
        let offset = (self.page - 1).max(0) as i64 * page_size;
        (page_size, offset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct OrderItemRequest {
    #[schema(example = 1)]
    pub product_id: i32,

    #[validate(range(min = 1, message = "Quantity must be greater than zero"))]
    #[schema(example = 2)]
    pub quantity: i32,

    /// Unit price. Trusted only by the checkout endpoint; order creation
    /// re-prices every item from the product table.
    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    #[schema(example = 999.99)]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "Order must contain at least one item"))]
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,

    #[validate(length(min = 10, max = 500, message = "Shipping address must be 10-500 characters"))]
    #[schema(example = "Rua das Flores, 123 - Sao Paulo")]
    pub shipping_address: String,

    #[validate(length(min = 1, message = "Payment method is required"))]
    #[schema(example = "credit_card")]
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1, message = "Status is required"))]
    #[schema(example = "shipped")]
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct StockValidationRequest {
    #[validate(length(min = 1, message = "At least one item is required"))]
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,
}

/// Fully priced order ready for the repository. Built by the order and
/// stock services after stock validation.
#[derive(Debug, Clone)]
pub struct NewOrder {
    pub items: Vec<NewOrderItem>,
    pub total_price: f64,
    pub shipping_address: String,
    pub payment_method: String,
    pub clear_cart: bool,
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub product_id: i32,
    pub quantity: i32,
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32) -> OrderItemRequest {
        OrderItemRequest {
            product_id: 1,
            quantity,
            price: 10.0,
        }
    }

    #[test]
    fn empty_order_is_rejected() {
        let req = CreateOrderRequest {
            items: vec![],
            shipping_address: "Rua das Flores, 123".into(),
            payment_method: "credit_card".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn nested_item_validation_applies() {
        let req = CreateOrderRequest {
            items: vec![item(0)],
            shipping_address: "Rua das Flores, 123".into(),
            payment_method: "credit_card".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn short_shipping_address_is_rejected() {
        let req = CreateOrderRequest {
            items: vec![item(1)],
            shipping_address: "Rua 1".into(),
            payment_method: "credit_card".into(),
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn order_paging_is_capped() {
        let params: FindAllOrders = serde_json::from_str(r#"{"page": 2, "page_size": 500}"#).unwrap();

        assert_eq!(params.limit_offset(), (100, 100));
    }

    #[test]
    fn valid_order_passes() {
        let req = CreateOrderRequest {
            items: vec![item(2)],
            shipping_address: "Rua das Flores, 123".into(),
            payment_method: "credit_card".into(),
        };

        assert!(req.validate().is_ok());
    }
}

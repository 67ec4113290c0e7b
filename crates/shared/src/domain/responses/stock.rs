use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct UnavailableItem {
    pub product_id: i32,
    pub product_name: Option<String>,
    pub requested_quantity: i32,
    pub available_quantity: i32,
    pub reason: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StockValidationResponse {
    pub is_valid: bool,
    pub message: String,
    pub unavailable_items: Vec<UnavailableItem>,
}

impl StockValidationResponse {
    pub fn new(unavailable_items: Vec<UnavailableItem>) -> Self {
        let is_valid = unavailable_items.is_empty();
        let message = if is_valid {
            "All items have stock available".to_string()
        } else {
            "Some items do not have enough stock".to_string()
        };

        Self {
            is_valid,
            message,
            unavailable_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let response = StockValidationResponse::new(vec![]);
        assert!(response.is_valid);
    }

    #[test]
    fn unavailable_items_invalidate_report() {
        let response = StockValidationResponse::new(vec![UnavailableItem {
            product_id: 1,
            product_name: Some("iPhone 15".into()),
            requested_quantity: 5,
            available_quantity: 2,
            reason: "Insufficient stock. Available: 2".into(),
        }]);

        assert!(!response.is_valid);
        assert_eq!(response.unavailable_items.len(), 1);
    }
}

use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category_id: i32,
    pub image_url: Option<String>,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            description: value.description,
            price: value.price,
            category_id: value.category_id,
            image_url: value.image_url,
            stock: value.stock,
            is_active: value.is_active,
            created_at: value.created_at.map(|dt| dt.to_string()),
            updated_at: value.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductAvailabilityResponse {
    pub product_id: i32,
    pub product_name: String,
    pub available_quantity: i32,
    pub is_available: bool,
    pub message: String,
}

impl From<Product> for ProductAvailabilityResponse {
    fn from(value: Product) -> Self {
        let is_available = value.stock > 0;
        let message = if is_available {
            "Product available".to_string()
        } else {
            "Product out of stock".to_string()
        };

        ProductAvailabilityResponse {
            product_id: value.product_id,
            product_name: value.name,
            available_quantity: value.stock,
            is_available,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(stock: i32) -> Product {
        Product {
            product_id: 1,
            name: "iPhone 15".into(),
            description: None,
            price: 999.99,
            category_id: 1,
            image_url: None,
            stock,
            is_active: true,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn availability_reflects_stock_level() {
        let available = ProductAvailabilityResponse::from(product(5));
        assert!(available.is_available);
        assert_eq!(available.available_quantity, 5);

        let sold_out = ProductAvailabilityResponse::from(product(0));
        assert!(!sold_out.is_available);
    }
}

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllProducts {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,

    pub category_id: Option<i32>,

    pub min_price: Option<f64>,

    pub max_price: Option<f64>,

    pub is_active: Option<bool>,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl FindAllProducts {
    /// Pagination normalised for SQL: page floors at 1, page_size is
    /// capped at 100.
    pub fn limit_offset(&self) -> (i64, i64) {
        let page_size = self.page_size.clamp(1, 100) as i64;
        let offset = (self.page - 1).max(0) as i64 * page_size;
        (page_size, offset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    #[schema(example = "iPhone 15")]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    #[schema(example = 999.99)]
    pub price: f64,

    #[schema(example = 1)]
    pub category_id: i32,

    #[validate(length(max = 500))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    #[serde(default)]
    #[schema(example = 50)]
    pub stock: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(skip)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0.01, message = "Price must be greater than zero"))]
    pub price: Option<f64>,

    pub category_id: Option<i32>,

    #[validate(length(max = 500))]
    pub image_url: Option<String>,

    #[validate(range(min = 0, message = "Stock cannot be negative"))]
    pub stock: Option<i32>,

    pub is_active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_price_is_rejected() {
        let req = CreateProductRequest {
            name: "iPhone 15".into(),
            description: None,
            price: 0.0,
            category_id: 1,
            image_url: None,
            stock: 10,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_stock_is_rejected() {
        let req = CreateProductRequest {
            name: "iPhone 15".into(),
            description: None,
            price: 999.99,
            category_id: 1,
            image_url: None,
            stock: -1,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn filters_deserialize_from_query_shape() {
        let params: FindAllProducts = serde_json::from_str(
            r#"{"category_id": 1, "min_price": 100.0, "max_price": 1000.0, "search": "iPhone"}"#,
        )
        .unwrap();

        assert_eq!(params.page, 1);
        assert_eq!(params.category_id, Some(1));
        assert_eq!(params.search, "iPhone");
        assert_eq!(params.is_active, None);
    }

    #[test]
    fn page_size_is_capped_at_one_hundred() {
        let params: FindAllProducts = serde_json::from_str(r#"{"page_size": 100000}"#).unwrap();

        let (page_size, offset) = params.limit_offset();
        assert_eq!(page_size, 100);
        assert_eq!(offset, 0);
    }
}

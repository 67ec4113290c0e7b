use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema, IntoParams)]
pub struct FindAllCategories {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_page_size")]
    pub page_size: i32,

    #[serde(default)]
    pub search: String,
}

fn default_page() -> i32 {
    1
}

fn default_page_size() -> i32 {
    10
}

impl FindAllCategories {
    pub fn limit_offset(&self) -> (i64, i64) {
        let page_size = self.page_size.clamp(1, 100) as i64;
        let offset = (self.page - 1).max(0) as i64 * page_size;
        (page_size, offset)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    #[schema(example = "Electronics")]
    pub name: String,

    #[validate(length(max = 500))]
    #[schema(example = "Phones, laptops and accessories")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(skip)]
    pub id: Option<i32>,

    #[validate(length(min = 1, max = 100, message = "Name is required"))]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        let req = CreateCategoryRequest {
            name: "".into(),
            description: None,
        };

        assert!(req.validate().is_err());
    }

    #[test]
    fn paging_defaults_apply_on_empty_query() {
        let params: FindAllCategories = serde_json::from_str("{}").unwrap();

        assert_eq!(params.page, 1);
        assert_eq!(params.page_size, 10);
        assert!(params.search.is_empty());
    }

    #[test]
    fn out_of_range_paging_is_normalised() {
        let params: FindAllCategories =
            serde_json::from_str(r#"{"page": -3, "page_size": 0}"#).unwrap();

        assert_eq!(params.limit_offset(), (1, 0));
    }
}

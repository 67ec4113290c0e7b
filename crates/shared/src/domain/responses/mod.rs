mod api;
mod cart;
mod category;
mod order;
mod product;
mod stock;
mod token;
mod user;

pub use self::api::{ApiResponse, ApiResponsePagination, Pagination};
pub use self::cart::{CartItemResponse, CartResponse};
pub use self::category::CategoryResponse;
pub use self::order::{OrderItemResponse, OrderResponse, OrderStatusResponse};
pub use self::product::{ProductAvailabilityResponse, ProductResponse};
pub use self::stock::{StockValidationResponse, UnavailableItem};
pub use self::token::TokenResponse;
pub use self::user::UserResponse;

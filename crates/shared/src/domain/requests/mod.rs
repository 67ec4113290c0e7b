mod auth;
mod cart;
mod category;
mod order;
mod product;
mod user;

pub use self::auth::{LoginRequest, RefreshTokenRequest, RegisterRequest, UpdateProfileRequest};
pub use self::cart::{AddCartItemRequest, UpdateCartItemRequest};
pub use self::category::{CreateCategoryRequest, FindAllCategories, UpdateCategoryRequest};
pub use self::order::{
    CreateOrderRequest, FindAllOrders, NewOrder, NewOrderItem, OrderItemRequest,
    StockValidationRequest, UpdateOrderStatusRequest,
};
pub use self::product::{CreateProductRequest, FindAllProducts, UpdateProductRequest};
pub use self::user::{CreateUserData, UpdateUserData};

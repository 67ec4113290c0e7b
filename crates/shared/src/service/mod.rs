pub mod auth;
mod cart;
mod category;
mod order;
mod product;
mod stock;

pub use self::auth::{IdentityService, LoginService, RegisterService, TokenService};
pub use self::cart::CartService;
pub use self::category::CategoryService;
pub use self::order::OrderService;
pub use self::product::ProductService;
pub use self::stock::StockService;

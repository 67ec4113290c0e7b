pub mod cart;
pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use self::cart::{CartCommandRepository, CartQueryRepository};
pub use self::category::{CategoryCommandRepository, CategoryQueryRepository};
pub use self::order::{OrderCommandRepository, OrderQueryRepository};
pub use self::product::{ProductCommandRepository, ProductQueryRepository};
pub use self::user::{UserCommandRepository, UserQueryRepository};

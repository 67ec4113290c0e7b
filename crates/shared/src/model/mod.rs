mod cart;
mod category;
mod order;
mod product;
mod user;

pub use self::cart::{Cart, CartItem};
pub use self::category::Category;
pub use self::order::{Order, OrderItem, OrderStatus};
pub use self::product::Product;
pub use self::user::User;

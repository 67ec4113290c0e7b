mod auth;
mod cart;
mod category;
mod hashing;
mod jwt;
mod order;
mod product;
mod stock;
mod user;

pub use self::auth::{
    DynIdentityService, DynLoginService, DynRegisterService, DynTokenService,
    IdentityServiceTrait, LoginServiceTrait, RegisterServiceTrait, TokenServiceTrait,
};
pub use self::cart::{
    CartCommandRepositoryTrait, CartQueryRepositoryTrait, CartServiceTrait,
    DynCartCommandRepository, DynCartQueryRepository, DynCartService,
};
pub use self::category::{
    CategoryCommandRepositoryTrait, CategoryQueryRepositoryTrait, CategoryServiceTrait,
    DynCategoryCommandRepository, DynCategoryQueryRepository, DynCategoryService,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::order::{
    DynOrderCommandRepository, DynOrderQueryRepository, DynOrderService,
    OrderCommandRepositoryTrait, OrderQueryRepositoryTrait, OrderServiceTrait,
};
pub use self::product::{
    DynProductCommandRepository, DynProductQueryRepository, DynProductService,
    ProductCommandRepositoryTrait, ProductQueryRepositoryTrait, ProductServiceTrait,
};
pub use self::stock::{DynStockService, StockServiceTrait};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};

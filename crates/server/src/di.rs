use shared::{
    abstract_trait::{
        DynCartService, DynCategoryService, DynHashing, DynIdentityService, DynJwtService,
        DynLoginService, DynOrderService, DynProductService, DynRegisterService, DynStockService,
        DynTokenService, DynUserQueryRepository,
    },
    config::{ConnectionPool, Hashing},
    repository::{
        CartCommandRepository, CartQueryRepository, CategoryCommandRepository,
        CategoryQueryRepository, OrderCommandRepository, OrderQueryRepository,
        ProductCommandRepository, ProductQueryRepository, UserCommandRepository,
        UserQueryRepository,
    },
    service::{
        CartService, CategoryService, IdentityService, LoginService, OrderService, ProductService,
        RegisterService, StockService, TokenService,
    },
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub register_service: DynRegisterService,
    pub login_service: DynLoginService,
    pub identity_service: DynIdentityService,
    pub category_service: DynCategoryService,
    pub product_service: DynProductService,
    pub cart_service: DynCartService,
    pub order_service: DynOrderService,
    pub stock_service: DynStockService,
    pub user_query: DynUserQueryRepository,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("register_service", &"DynRegisterService")
            .field("login_service", &"DynLoginService")
            .field("identity_service", &"DynIdentityService")
            .field("category_service", &"DynCategoryService")
            .field("product_service", &"DynProductService")
            .field("cart_service", &"DynCartService")
            .field("order_service", &"DynOrderService")
            .field("stock_service", &"DynStockService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, jwt: DynJwtService) -> Self {
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let user_query =
            Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let user_command = Arc::new(UserCommandRepository::new(pool.clone()));

        let category_query = Arc::new(CategoryQueryRepository::new(pool.clone()));
        let category_command = Arc::new(CategoryCommandRepository::new(pool.clone()));

        let product_query = Arc::new(ProductQueryRepository::new(pool.clone()));
        let product_command = Arc::new(ProductCommandRepository::new(pool.clone()));

        let cart_query = Arc::new(CartQueryRepository::new(pool.clone()));
        let cart_command = Arc::new(CartCommandRepository::new(pool.clone()));

        let order_query = Arc::new(OrderQueryRepository::new(pool.clone()));
        let order_command = Arc::new(OrderCommandRepository::new(pool.clone()));

        let token_service =
            Arc::new(TokenService::new(jwt.clone())) as DynTokenService;

        let register_service = Arc::new(RegisterService::new(
            user_query.clone(),
            user_command.clone(),
            hashing.clone(),
        )) as DynRegisterService;

        let login_service = Arc::new(LoginService::new(
            user_query.clone(),
            hashing.clone(),
            token_service.clone(),
        )) as DynLoginService;

        let identity_service = Arc::new(IdentityService::new(
            user_query.clone(),
            user_command,
            hashing,
            jwt,
            token_service,
        )) as DynIdentityService;

        let category_service = Arc::new(CategoryService::new(
            category_query.clone(),
            category_command,
        )) as DynCategoryService;

        let product_service = Arc::new(ProductService::new(
            product_query.clone(),
            product_command,
            category_query,
        )) as DynProductService;

        let cart_service = Arc::new(CartService::new(
            cart_query,
            cart_command,
            product_query.clone(),
        )) as DynCartService;

        let order_service = Arc::new(OrderService::new(
            order_query,
            order_command.clone(),
            product_query.clone(),
        )) as DynOrderService;

        let stock_service =
            Arc::new(StockService::new(product_query, order_command)) as DynStockService;

        Self {
            register_service,
            login_service,
            identity_service,
            category_service,
            product_service,
            cart_service,
            order_service,
            stock_service,
            user_query,
        }
    }
}

mod auth;
mod cart;
mod category;
mod order;
mod product;
mod stock;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing::info;
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::auth::auth_routes;
pub use self::cart::cart_routes;
pub use self::category::category_routes;
pub use self::order::order_routes;
pub use self::product::product_routes;
pub use self::stock::stock_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register_user_handler,
        auth::login_user_handler,
        auth::refresh_token_handler,
        auth::get_me_handler,
        auth::update_me_handler,

        category::get_categories,
        category::get_category,
        category::create_category,
        category::update_category,
        category::delete_category,

        product::get_products,
        product::get_product,
        product::get_product_availability,
        product::create_product,
        product::update_product,
        product::delete_product,

        cart::get_cart,
        cart::add_cart_item,
        cart::update_cart_item,
        cart::remove_cart_item,
        cart::clear_cart,

        order::get_orders,
        order::get_order,
        order::create_order,
        order::cancel_order,
        order::get_order_status,
        order::update_order_status,

        stock::validate_stock,
        stock::checkout,
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Category", description = "Category endpoints"),
        (name = "Product", description = "Product catalog endpoints"),
        (name = "Cart", description = "Shopping cart endpoints"),
        (name = "Order", description = "Order endpoints"),
        (name = "Stock", description = "Stock validation and checkout endpoints"),
    )
)]
struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();

        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(utoipa::openapi::security::Http::new(
                utoipa::openapi::security::HttpAuthScheme::Bearer,
            )),
        );
    }
}

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(auth_routes(shared_state.clone()))
            .merge(category_routes(shared_state.clone()))
            .merge(product_routes(shared_state.clone()))
            .merge(cart_routes(shared_state.clone()))
            .merge(order_routes(shared_state.clone()))
            .merge(stock_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        info!("🚀 Server running on http://{}", listener.local_addr()?);
        info!("📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

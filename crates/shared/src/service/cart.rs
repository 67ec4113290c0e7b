use crate::{
    abstract_trait::{
        CartServiceTrait, DynCartCommandRepository, DynCartQueryRepository,
        DynProductQueryRepository,
    },
    domain::{
        requests::{AddCartItemRequest, UpdateCartItemRequest},
        responses::{ApiResponse, CartItemResponse, CartResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::info;
use validator::Validate;

pub struct CartService {
    query: DynCartQueryRepository,
    command: DynCartCommandRepository,
    products: DynProductQueryRepository,
}

impl CartService {
    pub fn new(
        query: DynCartQueryRepository,
        command: DynCartCommandRepository,
        products: DynProductQueryRepository,
    ) -> Self {
        Self {
            query,
            command,
            products,
        }
    }
}

#[async_trait]
impl CartServiceTrait for CartService {
    async fn get_cart(&self, user_id: i32) -> Result<ApiResponse<CartResponse>, ServiceError> {
        // Viewing the cart creates it on first access.
        let cart = self.command.get_or_create(user_id).await?;
        let items = self.query.find_items(cart.cart_id).await?;

        Ok(ApiResponse::success(
            "Cart retrieved successfully",
            CartResponse::from_parts(cart, items),
        ))
    }

    async fn add_item(
        &self,
        user_id: i32,
        req: &AddCartItemRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        req.validate()?;

        let product = self
            .products
            .find_by_id(req.product_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if !product.is_active {
            return Err(ServiceError::Validation(vec![
                "Product is not available".into(),
            ]));
        }

        let cart = self.command.get_or_create(user_id).await?;

        // Stock is checked against the quantity already in the cart, since
        // re-adding a product accumulates.
        let already_in_cart = self
            .query
            .find_item_by_product(cart.cart_id, req.product_id)
            .await?
            .map(|item| item.quantity)
            .unwrap_or(0);

        if product.stock < already_in_cart + req.quantity {
            return Err(ServiceError::Validation(vec![format!(
                "Insufficient stock. Available: {}",
                product.stock
            )]));
        }

        let item = self
            .command
            .add_item(cart.cart_id, req.product_id, req.quantity, product.price)
            .await?;

        info!("✅ Added product {} to cart {}", req.product_id, cart.cart_id);

        Ok(ApiResponse::success(
            "Item added to cart",
            CartItemResponse::from(item),
        ))
    }

    async fn update_item(
        &self,
        user_id: i32,
        cart_item_id: i32,
        req: &UpdateCartItemRequest,
    ) -> Result<ApiResponse<CartItemResponse>, ServiceError> {
        req.validate()?;

        let item = self
            .query
            .find_item_for_user(cart_item_id, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        let product = self
            .products
            .find_by_id(item.product_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        if product.stock < req.quantity {
            return Err(ServiceError::Validation(vec![format!(
                "Insufficient stock. Available: {}",
                product.stock
            )]));
        }

        let updated = self
            .command
            .update_item_quantity(cart_item_id, req.quantity)
            .await?;

        Ok(ApiResponse::success(
            "Cart item updated",
            CartItemResponse::from(updated),
        ))
    }

    async fn remove_item(&self, user_id: i32, cart_item_id: i32) -> Result<(), ServiceError> {
        self.query
            .find_item_for_user(cart_item_id, user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.command.delete_item(cart_item_id).await?;

        info!("✅ Removed cart item {cart_item_id}");
        Ok(())
    }

    async fn clear(&self, user_id: i32) -> Result<(), ServiceError> {
        let cart = self
            .query
            .find_by_user(user_id)
            .await?
            .ok_or(RepositoryError::NotFound)?;

        self.command.clear(cart.cart_id).await?;

        info!("✅ Cleared cart {}", cart.cart_id);
        Ok(())
    }
}

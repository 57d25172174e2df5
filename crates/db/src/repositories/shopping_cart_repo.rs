//! Shopping-list source data: the ingredient lines of every recipe in a
//! user's cart.

use foodgram_core::shopping_list::{build_shopping_list, ShoppingListEntry};
use foodgram_core::types::DbId;
use sqlx::PgPool;

use crate::models::shopping_cart::CartLineItem;

/// Read side of the shopping cart.
pub struct ShoppingCartRepo;

impl ShoppingCartRepo {
    /// Every ingredient line of every purchased recipe.
    ///
    /// Purchases come oldest first and lines in recipe order, so the
    /// aggregated list has a stable first-seen order.
    pub async fn line_items_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<CartLineItem>, sqlx::Error> {
        sqlx::query_as::<_, CartLineItem>(
            "SELECT i.name, i.measurement_unit, ri.amount
             FROM purchases p
             JOIN recipe_ingredients ri ON ri.recipe_id = p.recipe_id
             JOIN ingredients i ON i.id = ri.ingredient_id
             WHERE p.user_id = $1
             ORDER BY p.created_at, p.id, ri.id",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Build the consolidated shopping list for a user. Empty cart yields an
    /// empty list.
    pub async fn shopping_list(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ShoppingListEntry>, sqlx::Error> {
        let items = Self::line_items_for_user(pool, user_id).await?;
        Ok(build_shopping_list(items.into_iter().map(Into::into)))
    }
}

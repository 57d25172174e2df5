//! Favorite, purchase and follow association rows.

use foodgram_core::relation::RelationKind;
use foodgram_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::recipe::RecipeShort;
use crate::models::user::UserProfile;

/// The two per-user recipe collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeList {
    Favorites,
    ShoppingCart,
}

impl RecipeList {
    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            RecipeList::Favorites => "favorites",
            RecipeList::ShoppingCart => "purchases",
        }
    }

    pub fn kind(self) -> RelationKind {
        match self {
            RecipeList::Favorites => RelationKind::Favorite,
            RecipeList::ShoppingCart => RelationKind::Purchase,
        }
    }
}

/// A row from `favorites` or `purchases`.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeListEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub recipe_id: DbId,
    pub created_at: Timestamp,
}

/// A row from `follows`.
#[derive(Debug, Clone, FromRow)]
pub struct Follow {
    pub id: DbId,
    pub user_id: DbId,
    pub author_id: DbId,
    pub created_at: Timestamp,
}

/// A followed author with a preview of their recipes.
#[derive(Debug, Clone, Serialize)]
pub struct Subscription {
    #[serde(flatten)]
    pub author: UserProfile,
    pub recipes: Vec<RecipeShort>,
    pub recipes_count: i64,
}

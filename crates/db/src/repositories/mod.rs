//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Reads that depend on who is
//! asking take an explicit `viewer_id: Option<DbId>`.

pub mod follow_repo;
pub mod ingredient_repo;
pub mod recipe_list_repo;
pub mod recipe_repo;
pub mod session_repo;
pub mod shopping_cart_repo;
pub mod tag_repo;
pub mod user_repo;

pub use follow_repo::FollowRepo;
pub use ingredient_repo::IngredientRepo;
pub use recipe_list_repo::RecipeListRepo;
pub use recipe_repo::RecipeRepo;
pub use session_repo::SessionRepo;
pub use shopping_cart_repo::ShoppingCartRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;

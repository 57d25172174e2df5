//! Row models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` + `Validate` request DTOs for inserts and patches
//! - `Serialize` response shapes where the API exposes joined data

pub mod ingredient;
pub mod recipe;
pub mod relation;
pub mod session;
pub mod shopping_cart;
pub mod tag;
pub mod user;

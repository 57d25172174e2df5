//! HTTP handlers, one module per resource.

pub mod auth;
pub mod favorites;
pub mod ingredients;
pub mod recipe_lists;
pub mod recipes;
pub mod shopping_cart;
pub mod subscriptions;
pub mod tags;
pub mod users;

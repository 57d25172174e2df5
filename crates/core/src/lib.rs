//! Domain core for the Foodgram backend.
//!
//! Pure logic with no I/O: shared types, the error taxonomy, validation rules
//! for users, catalog entries and recipes, relationship guards, and the
//! shopping-list aggregation engine. Both `foodgram-db` and `foodgram-api`
//! depend on this crate.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod recipe;
pub mod relation;
pub mod roles;
pub mod shopping_list;
pub mod types;
pub mod users;

//! Fixtures shared by the repository integration tests.

#![allow(dead_code)]

use foodgram_core::types::DbId;
use foodgram_db::models::ingredient::CreateIngredient;
use foodgram_db::models::recipe::{CreateRecipe, IngredientAmount};
use foodgram_db::models::tag::CreateTag;
use foodgram_db::models::user::CreateUser;
use foodgram_db::repositories::{IngredientRepo, RecipeRepo, TagRepo, UserRepo};
use sqlx::PgPool;

pub async fn create_user(pool: &PgPool, username: &str) -> DbId {
    let input = CreateUser {
        email: format!("{username}@example.com"),
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        password_hash: "not-a-real-hash".to_string(),
        is_admin: false,
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

pub async fn create_tag(pool: &PgPool, slug: &str) -> DbId {
    let input = CreateTag {
        name: slug.to_string(),
        color: "#E26C2D".to_string(),
        slug: slug.to_string(),
    };
    TagRepo::create(pool, &input).await.unwrap().id
}

pub async fn create_ingredient(pool: &PgPool, name: &str, unit: &str) -> DbId {
    let input = CreateIngredient {
        name: name.to_string(),
        measurement_unit: unit.to_string(),
    };
    IngredientRepo::create(pool, &input).await.unwrap().id
}

pub fn recipe_input(name: &str, tags: Vec<DbId>, lines: &[(DbId, i32)]) -> CreateRecipe {
    CreateRecipe {
        tags,
        ingredients: lines
            .iter()
            .map(|&(id, amount)| IngredientAmount { id, amount })
            .collect(),
        name: name.to_string(),
        text: format!("How to make {name}"),
        cooking_time: 10,
    }
}

pub async fn create_recipe(
    pool: &PgPool,
    author_id: DbId,
    name: &str,
    tags: Vec<DbId>,
    lines: &[(DbId, i32)],
) -> DbId {
    RecipeRepo::create(pool, author_id, &recipe_input(name, tags, lines))
        .await
        .unwrap()
        .id
}

//! Integration tests for recipe persistence:
//! - Transactional create with tag links and ingredient lines
//! - Partial update and whole-set replacement
//! - Viewer flags and list filters
//! - Cascade delete

mod common;

use common::{create_ingredient, create_recipe, create_tag, create_user, recipe_input};
use foodgram_db::models::recipe::{IngredientAmount, RecipeFilter, UpdateRecipe};
use foodgram_db::models::relation::RecipeList;
use foodgram_db::repositories::{RecipeListRepo, RecipeRepo};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_and_read_detail(pool: PgPool) {
    let author = create_user(&pool, "chef").await;
    let breakfast = create_tag(&pool, "breakfast").await;
    let flour = create_ingredient(&pool, "flour", "g").await;
    let eggs = create_ingredient(&pool, "eggs", "pcs").await;

    let id = create_recipe(
        &pool,
        author,
        "Pancakes",
        vec![breakfast],
        &[(flour, 200), (eggs, 2)],
    )
    .await;

    let detail = RecipeRepo::find_detail(&pool, id, None).await.unwrap().unwrap();
    assert_eq!(detail.name, "Pancakes");
    assert_eq!(detail.author.id, author);
    assert!(!detail.author.is_subscribed);
    assert_eq!(detail.tags.len(), 1);
    assert_eq!(detail.tags[0].slug, "breakfast");

    let lines: Vec<(&str, i32)> = detail
        .ingredients
        .iter()
        .map(|i| (i.name.as_str(), i.amount))
        .collect();
    assert_eq!(lines, [("flour", 200), ("eggs", 2)]);
    assert!(!detail.is_favorited);
    assert!(!detail.is_in_shopping_cart);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_ingredient_rolls_back_whole_create(pool: PgPool) {
    let author = create_user(&pool, "chef").await;
    let tag = create_tag(&pool, "lunch").await;
    let salt = create_ingredient(&pool, "salt", "g").await;

    let input = recipe_input("Broken", vec![tag], &[(salt, 1), (salt, 2)]);
    let result = RecipeRepo::create(&pool, author, &input).await;
    assert!(result.is_err(), "uq_recipe_ingredients_recipe_ingredient must reject");

    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM recipes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count.0, 0, "failed create must not leave a recipe row");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_keeps_omitted_fields_and_replaces_sets(pool: PgPool) {
    let author = create_user(&pool, "chef").await;
    let lunch = create_tag(&pool, "lunch").await;
    let dinner = create_tag(&pool, "dinner").await;
    let rice = create_ingredient(&pool, "rice", "g").await;
    let onion = create_ingredient(&pool, "onion", "pcs").await;

    let id = create_recipe(&pool, author, "Pilaf", vec![lunch], &[(rice, 300)]).await;

    let update = UpdateRecipe {
        cooking_time: Some(45),
        tags: Some(vec![dinner]),
        ingredients: Some(vec![
            IngredientAmount { id: onion, amount: 1 },
            IngredientAmount { id: rice, amount: 250 },
        ]),
        ..Default::default()
    };
    let updated = RecipeRepo::update(&pool, id, &update).await.unwrap().unwrap();
    assert_eq!(updated.name, "Pilaf");
    assert_eq!(updated.cooking_time, 45);

    let detail = RecipeRepo::find_detail(&pool, id, None).await.unwrap().unwrap();
    let slugs: Vec<&str> = detail.tags.iter().map(|t| t.slug.as_str()).collect();
    assert_eq!(slugs, ["dinner"]);
    let lines: Vec<(&str, i32)> = detail
        .ingredients
        .iter()
        .map(|i| (i.name.as_str(), i.amount))
        .collect();
    assert_eq!(lines, [("onion", 1), ("rice", 250)]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_recipe_returns_none(pool: PgPool) {
    let result = RecipeRepo::update(&pool, 999_999, &UpdateRecipe::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters(pool: PgPool) {
    let anna = create_user(&pool, "anna").await;
    let boris = create_user(&pool, "boris").await;
    let breakfast = create_tag(&pool, "breakfast").await;
    let dinner = create_tag(&pool, "dinner").await;
    let milk = create_ingredient(&pool, "milk", "ml").await;

    let porridge = create_recipe(&pool, anna, "Porridge", vec![breakfast], &[(milk, 200)]).await;
    let _soup = create_recipe(&pool, boris, "Soup", vec![dinner], &[(milk, 100)]).await;
    let _latte = create_recipe(&pool, boris, "Latte", vec![breakfast], &[(milk, 150)]).await;

    // Newest first.
    let all = RecipeRepo::list_details(&pool, &RecipeFilter::default(), None, 10, 0)
        .await
        .unwrap();
    let names: Vec<&str> = all.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["Latte", "Soup", "Porridge"]);

    let by_author = RecipeFilter {
        author_id: Some(boris),
        ..Default::default()
    };
    assert_eq!(RecipeRepo::count(&pool, &by_author, None).await.unwrap(), 2);

    let by_tag = RecipeFilter {
        tag_slugs: vec!["breakfast".into()],
        ..Default::default()
    };
    assert_eq!(RecipeRepo::count(&pool, &by_tag, None).await.unwrap(), 2);

    let any_tag = RecipeFilter {
        tag_slugs: vec!["breakfast".into(), "dinner".into()],
        ..Default::default()
    };
    assert_eq!(RecipeRepo::count(&pool, &any_tag, None).await.unwrap(), 3);

    RecipeListRepo::add(&pool, RecipeList::Favorites, boris, porridge)
        .await
        .unwrap();
    let favorited = RecipeFilter {
        favorited_only: true,
        ..Default::default()
    };
    let page = RecipeRepo::list_details(&pool, &favorited, Some(boris), 10, 0)
        .await
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, porridge);
    assert!(page[0].is_favorited);

    // Anonymous viewer with a boolean filter sees nothing.
    assert_eq!(RecipeRepo::count(&pool, &favorited, None).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination(pool: PgPool) {
    let author = create_user(&pool, "chef").await;
    let tag = create_tag(&pool, "snack").await;
    let nuts = create_ingredient(&pool, "nuts", "g").await;
    for i in 0..5 {
        create_recipe(&pool, author, &format!("Snack {i}"), vec![tag], &[(nuts, 10)]).await;
    }

    let filter = RecipeFilter::default();
    let page = RecipeRepo::list_details(&pool, &filter, None, 2, 4).await.unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name, "Snack 0");
    assert_eq!(RecipeRepo::count(&pool, &filter, None).await.unwrap(), 5);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_cascades_lines_and_relations(pool: PgPool) {
    let author = create_user(&pool, "chef").await;
    let fan = create_user(&pool, "fan").await;
    let tag = create_tag(&pool, "dessert").await;
    let sugar = create_ingredient(&pool, "sugar", "g").await;
    let id = create_recipe(&pool, author, "Fudge", vec![tag], &[(sugar, 300)]).await;

    RecipeListRepo::add(&pool, RecipeList::ShoppingCart, fan, id)
        .await
        .unwrap();

    assert!(RecipeRepo::delete(&pool, id).await.unwrap());
    assert!(!RecipeRepo::delete(&pool, id).await.unwrap());

    for table in ["recipe_tags", "recipe_ingredients", "purchases"] {
        let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count.0, 0, "{table} rows must be removed with the recipe");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_short_by_authors_limits_per_author(pool: PgPool) {
    let anna = create_user(&pool, "anna").await;
    let boris = create_user(&pool, "boris").await;
    let tag = create_tag(&pool, "any").await;
    let water = create_ingredient(&pool, "water", "ml").await;
    for i in 0..4 {
        create_recipe(&pool, anna, &format!("A{i}"), vec![tag], &[(water, 1)]).await;
    }
    create_recipe(&pool, boris, "B0", vec![tag], &[(water, 1)]).await;

    let rows = RecipeRepo::short_by_authors(&pool, &[anna, boris], 2)
        .await
        .unwrap();
    let anna_names: Vec<&str> = rows
        .iter()
        .filter(|r| r.author_id == anna)
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(anna_names, ["A3", "A2"]);
    assert_eq!(rows.iter().filter(|r| r.author_id == boris).count(), 1);

    let mut counts = RecipeRepo::count_by_authors(&pool, &[anna, boris]).await.unwrap();
    counts.sort();
    assert_eq!(counts, vec![(anna, 4), (boris, 1)]);
}

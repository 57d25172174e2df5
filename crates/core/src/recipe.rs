//! Recipe validation rules and ownership checks.
//!
//! Every create/update request runs through these checks before any row is
//! written, so an invalid payload rejects the whole write.

use std::collections::HashSet;

use crate::error::CoreError;
use crate::types::DbId;

/// Maximum length of a recipe name.
pub const MAX_RECIPE_NAME_LEN: u64 = 200;

/// Minimum cooking time in minutes.
pub const MIN_COOKING_TIME: i32 = 1;

/// Minimum amount of a single ingredient line.
pub const MIN_INGREDIENT_AMOUNT: i32 = 1;

/// Validate a recipe name: non-blank and within length limit.
pub fn validate_recipe_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Recipe name must not be empty".to_string(),
        ));
    }
    if name.chars().count() as u64 > MAX_RECIPE_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Recipe name too long (max {MAX_RECIPE_NAME_LEN} characters)"
        )));
    }
    Ok(())
}

/// Validate that the cooking time is at least [`MIN_COOKING_TIME`].
pub fn validate_cooking_time(minutes: i32) -> Result<(), CoreError> {
    if minutes < MIN_COOKING_TIME {
        return Err(CoreError::Validation(format!(
            "cooking_time must be at least {MIN_COOKING_TIME}"
        )));
    }
    Ok(())
}

/// Validate the ingredient lines of a recipe, given as `(ingredient_id, amount)`.
///
/// Rejects an empty list, any amount below [`MIN_INGREDIENT_AMOUNT`], and two
/// lines referencing the same ingredient.
pub fn validate_ingredient_lines(lines: &[(DbId, i32)]) -> Result<(), CoreError> {
    if lines.is_empty() {
        return Err(CoreError::Validation(
            "A recipe needs at least one ingredient".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(lines.len());
    for &(ingredient_id, amount) in lines {
        if amount < MIN_INGREDIENT_AMOUNT {
            return Err(CoreError::Validation(format!(
                "Amount for ingredient {ingredient_id} must be at least {MIN_INGREDIENT_AMOUNT}"
            )));
        }
        if !seen.insert(ingredient_id) {
            return Err(CoreError::Validation(format!(
                "Ingredient {ingredient_id} is listed more than once"
            )));
        }
    }
    Ok(())
}

/// Validate the tag ids of a recipe: at least one, no repeats.
pub fn validate_tag_ids(tag_ids: &[DbId]) -> Result<(), CoreError> {
    if tag_ids.is_empty() {
        return Err(CoreError::Validation(
            "A recipe needs at least one tag".to_string(),
        ));
    }
    let unique: HashSet<_> = tag_ids.iter().collect();
    if unique.len() != tag_ids.len() {
        return Err(CoreError::Validation("Tags must not repeat".to_string()));
    }
    Ok(())
}

/// Only the author of a recipe or an admin may change or delete it.
pub fn ensure_can_modify(author_id: DbId, user_id: DbId, is_admin: bool) -> Result<(), CoreError> {
    if is_admin || author_id == user_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "Only the author or an admin can modify this recipe".to_string(),
        ))
    }
}

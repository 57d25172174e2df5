//! Shopping-list aggregation engine.
//!
//! Turns the ingredient line items of every recipe in a user's shopping cart
//! into one consolidated list. Line items are grouped by
//! `(ingredient name, measurement unit)` and their amounts summed; groups keep
//! the order in which they were first seen.
//!
//! The same ingredient name with two different units yields two entries.
//! Amounts in different units are never added together.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// File name offered in the `Content-Disposition` header of the export.
pub const SHOPPING_LIST_FILENAME: &str = "shopping_list.txt";

/// One ingredient line from one purchased recipe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i64,
}

/// One consolidated line of the shopping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShoppingListEntry {
    pub name: String,
    pub measurement_unit: String,
    pub total_amount: i64,
}

impl fmt::Display for ShoppingListEntry {
    /// Renders `"{name} - {total_amount} {measurement_unit}"`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} {}",
            self.name, self.total_amount, self.measurement_unit
        )
    }
}

/// Aggregate line items into shopping-list entries.
///
/// Input order matters: the first occurrence of a `(name, unit)` pair fixes
/// its position in the output. An empty input yields an empty list.
///
/// # Examples
///
/// ```
/// use foodgram_core::shopping_list::{build_shopping_list, LineItem};
///
/// let item = |name: &str, unit: &str, amount| LineItem {
///     name: name.into(),
///     measurement_unit: unit.into(),
///     amount,
/// };
/// let list = build_shopping_list(vec![
///     item("flour", "g", 200),
///     item("sugar", "g", 50),
///     item("flour", "g", 100),
/// ]);
/// assert_eq!(list[0].to_string(), "flour - 300 g");
/// assert_eq!(list[1].to_string(), "sugar - 50 g");
/// ```
pub fn build_shopping_list<I>(items: I) -> Vec<ShoppingListEntry>
where
    I: IntoIterator<Item = LineItem>,
{
    let mut totals: IndexMap<(String, String), i64> = IndexMap::new();

    for item in items {
        *totals
            .entry((item.name, item.measurement_unit))
            .or_insert(0) += item.amount;
    }

    totals
        .into_iter()
        .map(|((name, measurement_unit), total_amount)| ShoppingListEntry {
            name,
            measurement_unit,
            total_amount,
        })
        .collect()
}

/// Render entries as the plain-text export body, one newline-terminated line
/// per entry.
pub fn render_shopping_list(entries: &[ShoppingListEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.to_string());
        out.push('\n');
    }
    out
}

//! Shopping-cart read model.

use foodgram_core::shopping_list::LineItem;
use sqlx::FromRow;

/// One ingredient line of one recipe in a user's cart.
#[derive(Debug, Clone, FromRow)]
pub struct CartLineItem {
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl From<CartLineItem> for LineItem {
    fn from(row: CartLineItem) -> Self {
        LineItem {
            name: row.name,
            measurement_unit: row.measurement_unit,
            amount: i64::from(row.amount),
        }
    }
}

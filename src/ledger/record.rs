use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::Category;
use crate::currency::Amount;

/// One expense entry as displayed in the table.
///
/// The date is free-form text; the core only requires it to be non-empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub id: Uuid,
    pub description: String,
    pub amount: Amount,
    pub date: String,
    pub category: Category,
}

impl ExpenseRecord {
    pub fn new(
        description: impl Into<String>,
        amount: Amount,
        date: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            description: description.into(),
            amount,
            date: date.into(),
            category,
        }
    }
}

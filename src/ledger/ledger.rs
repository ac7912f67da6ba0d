use std::collections::BTreeMap;

use uuid::Uuid;

use super::category::Category;
use super::record::ExpenseRecord;
use crate::currency::Amount;
use crate::errors::LedgerError;

/// Ordered collection of expense records with derived totals.
///
/// Insertion order is display order. The running total is never stored; it is
/// recomputed from the current records on every query, so it cannot disagree
/// with them.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    records: Vec<ExpenseRecord>,
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Validates and appends a new record, returning its identifier.
    ///
    /// Nothing is appended when any argument is rejected.
    pub fn add(
        &mut self,
        description: &str,
        amount_text: &str,
        date: &str,
        category: Category,
    ) -> Result<Uuid, LedgerError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LedgerError::Validation(
                "description must not be empty".into(),
            ));
        }
        let date = date.trim();
        if date.is_empty() {
            return Err(LedgerError::Validation("date must not be empty".into()));
        }
        let amount: Amount = amount_text.parse()?;

        let record = ExpenseRecord::new(description, amount, date, category);
        let id = record.id;
        tracing::debug!(%id, amount = %record.amount, category = %record.category, "expense recorded");
        self.records.push(record);
        Ok(id)
    }

    /// Removes the record with `id`, returning it.
    pub fn remove(&mut self, id: Uuid) -> Result<ExpenseRecord, LedgerError> {
        let index = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(LedgerError::NotFound)?;
        let record = self.records.remove(index);
        tracing::debug!(%id, amount = %record.amount, "expense removed");
        Ok(record)
    }

    /// Sum of all current record amounts; zero for an empty ledger.
    pub fn total(&self) -> Amount {
        self.records.iter().map(|record| record.amount).sum()
    }

    /// Sum of amounts per category present among current records.
    ///
    /// Categories with no records are omitted. Iteration follows the category
    /// declaration order.
    pub fn totals_by_category(&self) -> BTreeMap<Category, Amount> {
        let mut totals = BTreeMap::new();
        for record in &self.records {
            *totals.entry(record.category).or_insert(Amount::ZERO) += record.amount;
        }
        totals
    }

    pub fn record(&self, id: Uuid) -> Option<&ExpenseRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

use uuid::Uuid;

use super::expense::Expense;

/// Authoritative ordered collection of expense records.
///
/// The collection is always kept sorted by date descending (most recent
/// first); the sort is stable, so records sharing a date keep insertion
/// order. `update` and `delete` match on id only, never on position, since
/// deletion UIs operate asynchronously and may race each other.
#[derive(Debug, Default, Clone)]
pub struct LedgerStore {
    expenses: Vec<Expense>,
}

impl LedgerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<Expense>) -> Self {
        let mut store = Self { expenses: records };
        store.sort();
        store
    }

    /// Inserts a batch of records and re-sorts the collection.
    pub fn add_batch(&mut self, records: Vec<Expense>) {
        self.expenses.extend(records);
        self.sort();
    }

    /// Replaces the record with a matching id. Returns `false` without any
    /// change when no record matches; a concurrent delete may already have
    /// removed the target, so this is not an error.
    pub fn update(&mut self, record: Expense) -> bool {
        match self.expenses.iter_mut().find(|e| e.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.sort();
                true
            }
            None => {
                tracing::debug!(id = %record.id, "update target not found; ignoring");
                false
            }
        }
    }

    /// Removes the record with the given id; `false` when absent.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        let removed = self.expenses.len() != before;
        if !removed {
            tracing::debug!(%id, "delete target not found; ignoring");
        }
        removed
    }

    /// Wholesale replacement, used by restore/import. Dates are valid by
    /// construction (coercion happens at the serde boundary), so the sort
    /// invariant cannot be violated by external data.
    pub fn replace_all(&mut self, records: Vec<Expense>) {
        self.expenses = records;
        self.sort();
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    pub fn records(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn get(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    pub(crate) fn records_mut(&mut self) -> &mut [Expense] {
        &mut self.expenses
    }

    fn sort(&mut self) {
        self.expenses.sort_by(|a, b| b.date.cmp(&a.date));
    }
}

pub mod json_backend;

use std::path::PathBuf;

use crate::{errors::LedgerError, ledger::Expense};

pub type Result<T> = std::result::Result<T, LedgerError>;

/// Abstraction over persistence backends for the expense ledger.
///
/// The core never blocks on a backend mid-operation; callers load at
/// startup and persist after each mutation.
pub trait StorageBackend: Send + Sync {
    fn load(&self) -> Result<Vec<Expense>>;
    fn save(&self, expenses: &[Expense]) -> Result<()>;

    /// Writes a safety archive of the current records, used before a
    /// destructive reset. Returns the archive path.
    fn reset_backup(&self, expenses: &[Expense]) -> Result<PathBuf>;
}

pub use json_backend::{export_json, import_json, JsonStorage};

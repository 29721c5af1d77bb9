use chrono::Utc;
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::LedgerError,
    ledger::Expense,
    utils::{app_data_dir, archives_dir_in, ensure_dir, expenses_file_in},
};

use super::{Result, StorageBackend};

const TMP_SUFFIX: &str = "tmp";
const ARCHIVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H-%M-%S";

/// JSON file backend storing the full record sequence in a single file,
/// written atomically (tmp file + rename).
#[derive(Debug, Clone)]
pub struct JsonStorage {
    data_file: PathBuf,
    archives_dir: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = root.unwrap_or_else(app_data_dir);
        ensure_dir(&base)?;
        Ok(Self {
            data_file: expenses_file_in(&base),
            archives_dir: archives_dir_in(&base),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

impl StorageBackend for JsonStorage {
    /// Loads the stored records; a missing data file is an empty ledger.
    fn load(&self) -> Result<Vec<Expense>> {
        if !self.data_file.exists() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.data_file)?;
        let expenses: Vec<Expense> = serde_json::from_str(&data)?;
        tracing::debug!(count = expenses.len(), "loaded expenses");
        Ok(expenses)
    }

    fn save(&self, expenses: &[Expense]) -> Result<()> {
        let json = serde_json::to_string_pretty(expenses)?;
        let tmp = tmp_path(&self.data_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.data_file)?;
        tracing::debug!(count = expenses.len(), "saved expenses");
        Ok(())
    }

    fn reset_backup(&self, expenses: &[Expense]) -> Result<PathBuf> {
        ensure_dir(&self.archives_dir)?;
        let name = format!(
            "archive_reset_{}.json",
            Utc::now().format(ARCHIVE_TIMESTAMP_FORMAT)
        );
        let path = self.archives_dir.join(name);
        let json = serde_json::to_string_pretty(expenses)?;
        write_atomic(&path, &json)?;
        tracing::info!(path = %path.display(), "wrote reset archive");
        Ok(path)
    }
}

/// Serializes the full record sequence verbatim, for export.
pub fn export_json(expenses: &[Expense]) -> Result<String> {
    Ok(serde_json::to_string_pretty(expenses)?)
}

/// Parses an import payload. The payload must be a non-empty JSON array of
/// record-shaped objects; anything else is rejected before any store
/// mutation. Unparseable record dates are coerced to today during
/// deserialization.
pub fn import_json(raw: &str) -> Result<Vec<Expense>> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|err| LedgerError::ImportFormat(format!("payload is not valid JSON: {}", err)))?;
    let items = value.as_array().ok_or_else(|| {
        LedgerError::ImportFormat("payload must be a JSON array of expenses".into())
    })?;
    if items.is_empty() {
        return Err(LedgerError::ImportFormat(
            "payload contains no expenses".into(),
        ));
    }
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<Expense>(item.clone()).map_err(|err| {
                LedgerError::ImportFormat(format!("record {} is not expense-shaped: {}", index, err))
            })
        })
        .collect()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

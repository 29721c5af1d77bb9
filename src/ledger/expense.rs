use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{errors::LedgerError, money::Amount};

use super::users::Payer;

/// How responsibility for an expense is divided between payer and the other
/// party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SplitType {
    /// Cost divided 50/50.
    #[serde(rename = "EQUAL")]
    Equal,
    /// Entire amount owed by the other party to the payer.
    #[serde(rename = "FULL_FOR_OTHER")]
    FullForOther,
}

/// Informational only; never affects balance math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "CREDIT")]
    Credit,
    #[serde(rename = "DEBIT")]
    Debit,
}

/// Advisory category labels. The data model accepts any string.
pub const CATEGORIES: &[&str] = &[
    "Groceries",
    "Dining Out",
    "Rent/Mortgage",
    "Utilities",
    "Transportation",
    "Fuel",
    "Parking",
    "Vehicles",
    "Entertainment",
    "Health",
    "Pets",
    "Shopping",
    "Travel",
    "Other",
];

/// A single dated expense record, as stored in the ledger and on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub amount: Amount,
    pub description: String,
    pub category: String,
    #[serde(with = "lenient_date")]
    pub date: NaiveDate,
    pub payer_id: Payer,
    pub split_type: SplitType,
    /// Creation-order tiebreaker in epoch milliseconds; strictly increasing
    /// within an installment batch.
    pub timestamp: i64,
    pub payment_method: PaymentMethod,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_settled: bool,
}

/// User intent for a new expense, before installment expansion.
#[derive(Debug, Clone)]
pub struct ExpenseDraft {
    pub amount: Amount,
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    pub payer_id: Payer,
    pub split_type: SplitType,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl ExpenseDraft {
    pub fn new(
        amount: Amount,
        description: impl Into<String>,
        category: impl Into<String>,
        date: NaiveDate,
        payer_id: Payer,
        split_type: SplitType,
        payment_method: PaymentMethod,
    ) -> Result<Self, LedgerError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "expense description must not be empty".into(),
            ));
        }
        Ok(Self {
            amount,
            description,
            category: category.into(),
            date,
            payer_id,
            split_type,
            payment_method,
            notes: None,
        })
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Dates serialize as `YYYY-MM-DD`. Deserialization normalizes unparseable
/// strings to today rather than failing, matching the import contract.
mod lenient_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::ledger::month::parse_date_or_today;

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(parse_date_or_today(&raw))
    }
}

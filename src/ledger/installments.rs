use chrono::Utc;
use uuid::Uuid;

use crate::errors::LedgerError;

use super::{
    expense::{Expense, ExpenseDraft},
    month::shift_month,
};

/// Expands a user-submitted expense intent into `installments` dated
/// records, using the current time as the batch timestamp base.
pub fn expand(draft: &ExpenseDraft, installments: u32) -> Result<Vec<Expense>, LedgerError> {
    expand_at(draft, installments, Utc::now().timestamp_millis())
}

/// Deterministic variant of [`expand`].
///
/// Record `i` (0-indexed) is dated `i` months after the draft's start date
/// with the day clamped to the target month, carries the floored even share
/// of the total (the last record absorbs the remainder), and gets timestamp
/// `base_timestamp_ms + i` so creation order survives date-based sorting.
pub fn expand_at(
    draft: &ExpenseDraft,
    installments: u32,
    base_timestamp_ms: i64,
) -> Result<Vec<Expense>, LedgerError> {
    if installments == 0 {
        return Err(LedgerError::Validation(
            "installment count must be at least 1".into(),
        ));
    }

    let (base, last) = draft.amount.split(installments);
    let mut records = Vec::with_capacity(installments as usize);
    for i in 0..installments {
        let amount = if i == installments - 1 { last } else { base };
        let description = if installments > 1 {
            format!("{} ({}/{})", draft.description, i + 1, installments)
        } else {
            draft.description.clone()
        };
        records.push(Expense {
            id: Uuid::new_v4(),
            amount,
            description,
            category: draft.category.clone(),
            date: shift_month(draft.date, i),
            payer_id: draft.payer_id,
            split_type: draft.split_type,
            timestamp: base_timestamp_ms + i as i64,
            payment_method: draft.payment_method,
            notes: draft.notes.clone(),
            is_settled: false,
        });
    }
    tracing::debug!(
        count = records.len(),
        total = %draft.amount,
        "expanded expense intent into installments"
    );
    Ok(records)
}

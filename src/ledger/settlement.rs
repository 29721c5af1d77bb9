use super::{month::MonthKey, store::LedgerStore};

/// Result of a settlement request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettleOutcome {
    /// `count` records were newly marked settled.
    Settled { count: usize },
    /// Every record in the month was already settled (or none exist).
    /// Informational, not an error; no state changed.
    NothingToSettle,
}

/// Marks every record dated in `month` as settled.
///
/// Non-destructive: amounts, dates, and payers are untouched, and records
/// stay visible in history; only the exclusion flag consumed by the balance
/// engine flips. Idempotent: a second call with no new records reports
/// [`SettleOutcome::NothingToSettle`].
pub fn settle(store: &mut LedgerStore, month: MonthKey) -> SettleOutcome {
    let has_unsettled = store
        .records()
        .iter()
        .any(|e| month.contains(e.date) && !e.is_settled);
    if !has_unsettled {
        tracing::debug!(%month, "nothing to settle");
        return SettleOutcome::NothingToSettle;
    }

    let mut count = 0;
    for expense in store.records_mut() {
        if month.contains(expense.date) && !expense.is_settled {
            expense.is_settled = true;
            count += 1;
        }
    }
    tracing::info!(%month, count, "settled month");
    SettleOutcome::Settled { count }
}

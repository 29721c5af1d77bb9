use std::collections::BTreeMap;

use crate::money::{Amount, NetBalance};

use super::{
    expense::{Expense, SplitType},
    month::MonthKey,
    users::Payer,
};

/// Derived totals for a record set. Never stored; recomputed on every query.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExpenseSummary {
    pub total_paid_a: Amount,
    pub total_paid_b: Amount,
    pub net_balance: NetBalance,
}

impl ExpenseSummary {
    /// The user who currently owes, or `None` when the balance is even.
    pub fn debtor(&self) -> Option<Payer> {
        if self.net_balance.is_even() {
            None
        } else if self.net_balance.is_positive() {
            Some(Payer::B)
        } else {
            Some(Payer::A)
        }
    }
}

/// Whether settled records contribute to the net balance. Paid totals always
/// include them; historical totals are never hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettledRecords {
    Exclude,
    Include,
}

/// Computes aggregate totals and the signed net balance for a record set.
///
/// Pure and deterministic: same records and filter, same output. `month`
/// restricts the computation to records dated in that calendar month;
/// `None` considers everything (all-time totals).
pub fn summarize(
    records: &[Expense],
    month: Option<MonthKey>,
    settled: SettledRecords,
) -> ExpenseSummary {
    let mut summary = ExpenseSummary::default();
    for expense in records {
        if let Some(filter) = month {
            if !filter.contains(expense.date) {
                continue;
            }
        }
        match expense.payer_id {
            Payer::A => summary.total_paid_a += expense.amount,
            Payer::B => summary.total_paid_b += expense.amount,
        }
        if expense.is_settled && settled == SettledRecords::Exclude {
            continue;
        }
        match (expense.payer_id, expense.split_type) {
            (Payer::A, SplitType::Equal) => summary.net_balance.credit_half(expense.amount),
            (Payer::A, SplitType::FullForOther) => summary.net_balance.credit_full(expense.amount),
            (Payer::B, SplitType::Equal) => summary.net_balance.debit_half(expense.amount),
            (Payer::B, SplitType::FullForOther) => summary.net_balance.debit_full(expense.amount),
        }
    }
    summary
}

/// Dashboard view: the current month with settled records excluded from the
/// net balance.
pub fn current_month_summary(records: &[Expense]) -> ExpenseSummary {
    summarize(records, Some(MonthKey::current()), SettledRecords::Exclude)
}

/// Per-category paid totals for the report breakdown, largest first.
/// Settled records are included; zero-amount categories are dropped.
pub fn category_totals(records: &[Expense], month: Option<MonthKey>) -> Vec<(String, Amount)> {
    let mut totals: BTreeMap<&str, Amount> = BTreeMap::new();
    for expense in records {
        if let Some(filter) = month {
            if !filter.contains(expense.date) {
                continue;
            }
        }
        *totals.entry(expense.category.as_str()).or_default() += expense.amount;
    }
    let mut out: Vec<(String, Amount)> = totals
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(category, amount)| (category.to_string(), amount))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

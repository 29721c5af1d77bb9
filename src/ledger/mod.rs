//! Ledger domain models, the installment expander, and the balance and
//! settlement engines.

pub mod balance;
pub mod expense;
pub mod installments;
pub mod month;
pub mod settlement;
pub mod store;
pub mod users;

pub use balance::{
    category_totals, current_month_summary, summarize, ExpenseSummary, SettledRecords,
};
pub use expense::{Expense, ExpenseDraft, PaymentMethod, SplitType, CATEGORIES};
pub use installments::{expand, expand_at};
pub use month::{days_in_month, parse_date_or_today, shift_month, MonthKey};
pub use settlement::{settle, SettleOutcome};
pub use store::LedgerStore;
pub use users::{Payer, User, UserPair};

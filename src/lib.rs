#![doc(test(attr(deny(warnings))))]

//! DuoSplit Core offers the expense ledger, installment expansion, and
//! balance-derivation primitives that power a two-party shared-expense
//! tracker.

pub mod config;
pub mod errors;
pub mod ledger;
pub mod money;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("DuoSplit Core tracing initialized.");
    });
}

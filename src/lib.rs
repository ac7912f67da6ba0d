#![doc(test(attr(deny(warnings))))]

//! Expense Core holds a session-scoped ledger of personal expenses and the
//! command shell that fronts it: add and remove line items, watch the running
//! total, and group spending by category.

pub mod cli;
pub mod currency;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}

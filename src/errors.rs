use thiserror::Error;

/// Error type that captures the recoverable ledger failures.
///
/// Every variant is surfaced to the user and leaves the ledger untouched;
/// there is no fatal path in the core.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A required field was empty, or the category is not one of the fixed set.
    #[error("Invalid input: {0}")]
    Validation(String),
    /// The amount text does not parse as a non-negative decimal.
    #[error("Amount is not a valid number: {0}")]
    Parse(String),
    /// A removal referenced a record that is not currently present.
    #[error("No matching expense record")]
    NotFound,
}

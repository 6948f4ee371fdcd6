use thiserror::Error;

/// Error taxonomy shared by all domain ports.
///
/// Write failures distinguish a rejected statement (constraint violation,
/// bad reference id) from an aborted transaction (connection lost, commit
/// failed). Callers must treat both as "nothing was written".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("internal server error")]
    InternalServerError,

    #[error("insert rejected: {0}")]
    InsertRejected(String),

    #[error("transaction aborted: {0}")]
    TransactionAborted(String),

    #[error("not found")]
    NotFound,
}

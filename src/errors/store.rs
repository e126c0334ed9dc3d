use thiserror::Error;

/// Errors raised by the document store client.
///
/// Connection problems and operation failures are distinct variants so
/// callers can tell "the server is unreachable" apart from "this call
/// failed", and a failed query is never conflated with an empty result.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("could not connect to MongoDB: {0}")]
    Connection(#[source] mongodb::error::Error),

    #[error("document store operation failed: {0}")]
    Operation(#[from] mongodb::error::Error),

    #[error("driver returned a non-ObjectId identifier: {0}")]
    UnexpectedId(String),
}

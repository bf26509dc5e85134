use std::num::ParseIntError;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Ways in which a protocol document can fail to yield packet IDs.
///
/// `path` is the dotted JSON path of the value being inspected, e.g.
/// `play.toClient.types.packet[1][0].type[1].mappings`.
#[derive(Debug, Error)]
pub enum Error {
    /// An expected object key or sequence element is absent.
    #[error("{path}: {key} not found")]
    NotFound { path: String, key: String },

    /// A value on the traversal path does not have the expected shape.
    #[error("{path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// A mapping key is not an integer literal.
    #[error("{path}: invalid packet id {key:?}")]
    ParseError {
        path: String,
        key: String,
        #[source]
        source: ParseIntError,
    },
}

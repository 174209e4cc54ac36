use std::num::ParseIntError;

use thiserror::Error;

/// A raw custom-field value that cannot be converted to its field's kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoercionError {
    #[error("expected an integer, got {raw:?}")]
    NotAnInteger {
        raw: String,
        #[source]
        source: ParseIntError,
    },
}

use thiserror::Error;

use super::Triple;

/// Errors returned by [`Triple::other`].
///
/// Both variants carry the triple so callers can report its contents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TripleError<T> {
    /// The triple holds a repeated element, so "the other two" is ambiguous.
    #[error("other() is only valid for a triple with differing elements: {triple:?}")]
    RepeatedElements { triple: Triple<T> },

    /// The requested value is not one of the triple's elements.
    #[error("triple {triple:?} does not contain {value:?}")]
    NotFound { triple: Triple<T>, value: T },
}

/// Errors that may occur when parsing a [`Triple`] from text or tokens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTripleError {
    /// Fewer than three values were available.
    #[error("expected 3 values, found {found}")]
    TooFewValues { found: usize },

    /// More than three values were given.
    #[error("expected 3 values, found at least {found}")]
    TooManyValues { found: usize },

    /// An opening or closing parenthesis is missing.
    #[error("unbalanced parentheses in {input:?}")]
    UnbalancedParentheses { input: String },

    /// A token could not be parsed as the element type.
    #[error("invalid value {token:?} at position {position}: {reason}")]
    InvalidValue {
        token: String,
        position: usize,
        reason: String,
    },
}

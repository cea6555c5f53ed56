//! Error type for card construction and deck growth.
//!
//! Every failure is a caller-input problem detected synchronously at the
//! call that received the bad input. A failed call has no side effect:
//! no partial card is ever observable and a failed append leaves the
//! deck unchanged.

use thiserror::Error;

/// Errors returned by card constructors and [`Deck::append`].
///
/// [`Deck::append`]: crate::deck::Deck::append
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// Argument shape/keyword mismatch, out-of-range numeric value, or an
    /// empty required argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Allocation failed while growing the deck.
    #[error("out of memory while growing the deck")]
    ResourceExhausted,
}

impl DeckError {
    /// Shorthand for an [`DeckError::InvalidArgument`] with a formatted message.
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        log::debug!("rejected card: {msg}");
        DeckError::InvalidArgument(msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = DeckError::invalid("volume fraction 1.5 outside [0, 1]");
        assert_eq!(
            err.to_string(),
            "invalid argument: volume fraction 1.5 outside [0, 1]"
        );

        assert_eq!(
            DeckError::ResourceExhausted.to_string(),
            "out of memory while growing the deck"
        );
    }
}

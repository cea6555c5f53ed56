//! The ordered card deck.
//!
//! A deck is an append-only sequence of [`Card`]s. Insertion order is
//! serialization order and is load-bearing: the solver's input format is
//! line-oriented and order-sensitive. The deck validates nothing across
//! cards (one title card, end card last, and so on are the caller's
//! responsibility); each card was already validated at construction.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::error::DeckError;

/// Ordered, append-only sequence of cards making up one solver input
/// file.
///
/// ## Example
///
/// ```
/// use additive_fea_deck::cards::{Card, CardKind};
/// use additive_fea_deck::deck::Deck;
///
/// let mut deck = Deck::new();
/// deck.append(Card::string(CardKind::Title, "Test Part")?)?;
/// deck.append(Card::void(CardKind::End)?)?;
///
/// let text: Vec<String> = deck.iter().map(|c| c.to_string()).collect();
/// assert_eq!(text, ["*TITLE Test Part", "*END"]);
/// # Ok::<(), additive_fea_deck::DeckError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a card to the end of the deck.
    ///
    /// Fails with [`DeckError::ResourceExhausted`] if the deck cannot
    /// grow; in that case the deck is unchanged.
    pub fn append(&mut self, card: Card) -> Result<(), DeckError> {
        self.cards.try_reserve(1).map_err(|_| {
            log::debug!("deck append failed: allocation");
            DeckError::ResourceExhausted
        })?;
        self.cards.push(card);
        Ok(())
    }

    /// The full ordered card sequence, as an owned snapshot.
    ///
    /// Later appends do not affect a snapshot already taken.
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.cards.clone()
    }

    /// Iterate the cards in order without copying.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

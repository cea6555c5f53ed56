//! # additive-fea-deck
//!
//! Builder for additive FEA solver input decks.
//!
//! A solver input file is an ordered sequence of *cards*: a keyword such
//! as `*TITLE` or `*CONV` followed by its arguments. This crate models
//! that as three layers:
//!
//! - [`cards`]: the closed keyword catalogue ([`CardKind`]), the
//!   immutable [`Card`] value, and validating constructors, one per
//!   argument shape
//! - [`composites`]: accumulators for the two multi-line card kinds,
//!   [`StlMap`] (`*STLM`) and [`ConvectionTable`] (`*CONV`), frozen into
//!   cards by move
//! - [`deck`]: the append-only, order-preserving [`Deck`]
//!
//! Validation is per card and happens at construction; a card with a
//! keyword/argument mismatch or out-of-range value cannot exist. The
//! deck deliberately does not cross-validate (exactly one title, end
//! card last, and so on) - whole-deck structure belongs to the caller or
//! a higher-level assembly policy, matching what the solver itself
//! accepts.
//!
//! ## Example
//!
//! ```
//! use additive_fea_deck::{Card, CardKind, Deck, StlMap};
//!
//! let mut map = StlMap::new();
//! map.push_row("config1", "ti64.prm", "Ti-6Al-4V", 1.0);
//!
//! let mut deck = Deck::new();
//! deck.append(Card::string(CardKind::Title, "Bracket v3")?)?;
//! deck.append(Card::real(CardKind::StlTolerance, 0.01)?)?;
//! deck.append(Card::build_plate_z_bounds(0.0, -25.4)?)?;
//! deck.append(Card::stl_map(map)?)?;
//! deck.append(Card::void(CardKind::End)?)?;
//!
//! for card in deck.iter() {
//!     println!("{card}");
//! }
//! # Ok::<(), additive_fea_deck::DeckError>(())
//! ```

pub mod cards;
pub mod composites;
pub mod deck;
pub mod error;

// Re-export commonly used types
pub use crate::cards::{ArgShape, Card, CardKeyword, CardKind, CardValue};
pub use crate::composites::{ConvectionPoint, ConvectionTable, StlMap, StlMapRow};
pub use crate::deck::Deck;
pub use crate::error::DeckError;

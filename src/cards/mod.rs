//! Card system: keyword catalogue, immutable cards, and constructors.
//!
//! ## Key Types
//!
//! - [`CardKind`]: the closed keyword set and its keyword-to-shape table
//! - [`ArgShape`]: the argument shapes the format supports
//! - [`Card`] / [`CardValue`]: the immutable (keyword, value) pair and
//!   its rendering
//!
//! Constructors live in `factory` as inherent methods on [`Card`], one
//! per argument shape, each validating before construction.

mod card;
mod factory;
mod kind;

pub use card::{Card, CardKeyword, CardValue};
pub use kind::{ArgShape, CardKind};

//! Composite card builders.
//!
//! Two card kinds carry structured multi-line data: the `*STLM` mapping
//! and the `*CONV` table. Each has a mutable accumulator here that the
//! caller populates and then freezes into a single immutable card
//! ([`Card::stl_map`] / [`Card::convection`]); freezing consumes the
//! accumulator, so an already-built card can never see later mutation.
//!
//! [`Card::stl_map`]: crate::cards::Card::stl_map
//! [`Card::convection`]: crate::cards::Card::convection

mod convection;
mod stl_map;

pub use convection::{ConvectionPoint, ConvectionTable};
pub use stl_map::{StlMap, StlMapRow};

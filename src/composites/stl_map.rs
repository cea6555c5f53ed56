//! `*STLM` mapping builder.
//!
//! The STL map assigns each body a configuration, a PRM, a material, and
//! a volume fraction. Rows are accumulated in order and frozen into a
//! single card via [`Card::stl_map`], which consumes the builder.
//!
//! [`Card::stl_map`]: crate::cards::Card::stl_map

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// One row of the `*STLM` mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StlMapRow {
    /// Configuration identifier.
    pub configuration: String,
    /// PRM identifier.
    pub prm: String,
    /// Material identifier.
    pub material: String,
    /// Volume fraction of the body, in `[0, 1]`.
    pub volume_fraction: f64,
}

/// Accumulator for `*STLM` rows.
///
/// Rows keep their insertion order; that order is the card's data-line
/// order. Range checking happens when the map is frozen into a card, not
/// at push time.
///
/// ## Example
///
/// ```
/// use additive_fea_deck::composites::StlMap;
/// use additive_fea_deck::cards::Card;
///
/// let mut map = StlMap::new();
/// map.push_row("config1", "ti64.prm", "Ti-6Al-4V", 1.0);
/// let card = Card::stl_map(map).unwrap();
/// assert_eq!(card.name(), "*STLM");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct StlMap {
    rows: Vec<StlMapRow>,
}

impl StlMap {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a row.
    pub fn push_row(
        &mut self,
        configuration: impl Into<String>,
        prm: impl Into<String>,
        material: impl Into<String>,
        volume_fraction: f64,
    ) {
        self.rows.push(StlMapRow {
            configuration: configuration.into(),
            prm: prm.into(),
            material: material.into(),
            volume_fraction,
        });
    }

    /// The accumulated rows, in insertion order.
    #[must_use]
    pub fn rows(&self) -> &[StlMapRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the map has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Check the freeze invariants: at least one row, every volume
    /// fraction in `[0, 1]`.
    pub(crate) fn validate(&self) -> Result<(), DeckError> {
        if self.rows.is_empty() {
            return Err(DeckError::invalid("STL map requires at least one row"));
        }
        for (i, row) in self.rows.iter().enumerate() {
            // NaN fails both bounds comparisons, so it is rejected too.
            if !(0.0..=1.0).contains(&row.volume_fraction) {
                return Err(DeckError::invalid(format!(
                    "STL map row {i}: volume fraction {} outside [0, 1]",
                    row.volume_fraction
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn into_rows(self) -> Vec<StlMapRow> {
        self.rows
    }
}

//! `*CONV` convection table builder.
//!
//! A convection boundary condition is a table of temperature-dependent
//! convection coefficients. Points are accumulated in order and frozen
//! into a single card via [`Card::convection`], which consumes the
//! builder.
//!
//! [`Card::convection`]: crate::cards::Card::convection

use serde::{Deserialize, Serialize};

use crate::error::DeckError;

/// One point of the `*CONV` table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConvectionPoint {
    /// Temperature at which the coefficient applies.
    pub temperature: f64,
    /// Convection coefficient at that temperature.
    pub coefficient: f64,
}

/// Accumulator for `*CONV` points.
///
/// The solver interpolates between points, so a frozen table needs at
/// least two of them with strictly increasing temperatures. Both checks
/// run at freeze time.
///
/// ## Example
///
/// ```
/// use additive_fea_deck::composites::ConvectionTable;
/// use additive_fea_deck::cards::Card;
///
/// let mut table = ConvectionTable::new();
/// table.push_point(20.0, 1.0e-5);
/// table.push_point(500.0, 2.5e-5);
/// let card = Card::convection(table).unwrap();
/// assert_eq!(card.name(), "*CONV");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvectionTable {
    points: Vec<ConvectionPoint>,
}

impl ConvectionTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a temperature/coefficient point.
    pub fn push_point(&mut self, temperature: f64, coefficient: f64) {
        self.points.push(ConvectionPoint {
            temperature,
            coefficient,
        });
    }

    /// The accumulated points, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[ConvectionPoint] {
        &self.points
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the table has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Check the freeze invariants: at least two points, temperatures
    /// strictly increasing.
    pub(crate) fn validate(&self) -> Result<(), DeckError> {
        if self.points.len() < 2 {
            return Err(DeckError::invalid(format!(
                "convection table requires at least two points, got {}",
                self.points.len()
            )));
        }
        for (i, pair) in self.points.windows(2).enumerate() {
            // A NaN temperature fails the comparison and is rejected here.
            if !(pair[0].temperature < pair[1].temperature) {
                return Err(DeckError::invalid(format!(
                    "convection temperatures must be strictly increasing: point {} ({}) \
                     does not exceed point {} ({})",
                    i + 1,
                    pair[1].temperature,
                    i,
                    pair[0].temperature
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn into_points(self) -> Vec<ConvectionPoint> {
        self.points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut table = ConvectionTable::new();
        table.push_point(0.0, 1.0);
        table.push_point(100.0, 2.0);

        assert_eq!(table.len(), 2);
        assert_eq!(table.points()[0].temperature, 0.0);
        assert_eq!(table.points()[1].coefficient, 2.0);
    }

    #[test]
    fn test_validate_needs_two_points() {
        let mut table = ConvectionTable::new();
        assert!(table.validate().is_err());

        table.push_point(0.0, 1.0);
        assert!(table.validate().is_err());

        table.push_point(100.0, 2.0);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_monotone_temperatures() {
        let mut table = ConvectionTable::new();
        table.push_point(0.0, 1.0);
        table.push_point(0.0, 2.0);
        assert!(table.validate().is_err(), "equal temperatures must fail");

        let mut table = ConvectionTable::new();
        table.push_point(100.0, 1.0);
        table.push_point(0.0, 2.0);
        assert!(table.validate().is_err(), "decreasing temperatures must fail");

        let mut table = ConvectionTable::new();
        table.push_point(0.0, 1.0);
        table.push_point(50.0, 2.0);
        table.push_point(50.5, 1.5);
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_nan_temperature() {
        let mut table = ConvectionTable::new();
        table.push_point(0.0, 1.0);
        table.push_point(f64::NAN, 2.0);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_coefficients_unconstrained() {
        // Only temperatures carry an ordering requirement.
        let mut table = ConvectionTable::new();
        table.push_point(0.0, 5.0);
        table.push_point(100.0, -1.0);
        assert!(table.validate().is_ok());
    }
}

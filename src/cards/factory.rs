//! Card constructors.
//!
//! One constructor per argument shape, plus the fixed-keyword cards.
//! Each validates its input and returns `Err` instead of a card when the
//! input is bad; a failed call has no side effect. Shape restrictions for
//! the enumerated keywords all go through `check_shape`, which consults
//! the [`CardKind::shape`] table.

use smallvec::SmallVec;

use crate::composites::{ConvectionTable, StlMap};
use crate::error::DeckError;

use super::card::{Card, CardKeyword, CardValue};
use super::kind::{ArgShape, CardKind};

/// Reject a keyword whose declared shape differs from the constructor's.
fn check_shape(kind: CardKind, expected: ArgShape) -> Result<(), DeckError> {
    if kind.shape() == expected {
        Ok(())
    } else {
        Err(DeckError::invalid(format!(
            "{} takes {:?} arguments, not {:?}",
            kind.token(),
            kind.shape(),
            expected
        )))
    }
}

impl Card {
    /// Create a generic key/value card.
    ///
    /// `name` is the keyword text, e.g. `"*TITLE"` or `"*ADAP"`, and is
    /// emitted verbatim; this is the escape hatch for keywords the
    /// catalogue does not model. Fails only if `name` is empty.
    pub fn generic(name: impl Into<String>, value: impl Into<String>) -> Result<Self, DeckError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DeckError::invalid("generic card name must be non-empty"));
        }
        Ok(Card::new(
            CardKeyword::Generic(name),
            CardValue::Str(value.into()),
        ))
    }

    /// Create an enumerated card with no arguments.
    ///
    /// Valid for the zero-argument keywords: [`CardKind::BinaryOutput`],
    /// [`CardKind::EnsightOutput`], [`CardKind::NoOffCore`],
    /// [`CardKind::OnCore1`], [`CardKind::End`]. The card's argument text
    /// is empty.
    pub fn void(kind: CardKind) -> Result<Self, DeckError> {
        check_shape(kind, ArgShape::None)?;
        Ok(Card::new(CardKeyword::Known(kind), CardValue::None))
    }

    /// Create an enumerated card with a single integer argument.
    ///
    /// Valid for [`CardKind::AnalysisType`], [`CardKind::LayersPerElement`],
    /// [`CardKind::CoarseningGenerations`], [`CardKind::Adaptivity`].
    pub fn int(kind: CardKind, value: i32) -> Result<Self, DeckError> {
        check_shape(kind, ArgShape::Int)?;
        Ok(Card::new(CardKeyword::Known(kind), CardValue::Int(value)))
    }

    /// Create an enumerated card with a single real argument.
    ///
    /// Valid for [`CardKind::StlTolerance`],
    /// [`CardKind::AmbientTemperature`], [`CardKind::FinalTemperature`].
    pub fn real(kind: CardKind, value: f64) -> Result<Self, DeckError> {
        check_shape(kind, ArgShape::Real)?;
        Ok(Card::new(CardKeyword::Known(kind), CardValue::Real(value)))
    }

    /// Create an enumerated card with a single string argument.
    ///
    /// Valid for [`CardKind::Title`].
    pub fn string(kind: CardKind, value: impl Into<String>) -> Result<Self, DeckError> {
        check_shape(kind, ArgShape::Str)?;
        Ok(Card::new(
            CardKeyword::Known(kind),
            CardValue::Str(value.into()),
        ))
    }

    /// Create an enumerated card with a list of string arguments.
    ///
    /// Valid for [`CardKind::Stls`] and [`CardKind::Prms`]; the list must
    /// be non-empty.
    pub fn string_array(kind: CardKind, values: Vec<String>) -> Result<Self, DeckError> {
        check_shape(kind, ArgShape::StrArray)?;
        if values.is_empty() {
            return Err(DeckError::invalid(format!(
                "{} requires at least one value",
                kind.token()
            )));
        }
        Ok(Card::new(
            CardKeyword::Known(kind),
            CardValue::StrArray(SmallVec::from_vec(values)),
        ))
    }

    /// Create the `*DDM!` card fixing the build plate Z position.
    ///
    /// `z_top` is the Z coordinate of the top of the build plate in mm and
    /// should match the bottom Z of the parts or supports; `z_bottom` is
    /// the bottom of the plate. Fails unless `z_top` is strictly above
    /// `z_bottom`.
    pub fn build_plate_z_bounds(z_top: f64, z_bottom: f64) -> Result<Self, DeckError> {
        if z_top <= z_bottom {
            return Err(DeckError::invalid(format!(
                "build plate top ({z_top}) must be strictly above bottom ({z_bottom})"
            )));
        }
        Ok(Card::new(
            CardKeyword::Known(CardKind::BuildPlateZBounds),
            CardValue::ZBounds { z_top, z_bottom },
        ))
    }

    /// Create the `*IOBN` card toggling the solver's disk check.
    ///
    /// A negative `i1` disables the check; zero or positive enables it.
    /// `r1` is an unused placeholder argument preserved for format
    /// compatibility and is not validated.
    pub fn disk_check(i1: i32, r1: f64) -> Self {
        Card::new(
            CardKeyword::Known(CardKind::DiskCheck),
            CardValue::DiskCheck { i1, r1 },
        )
    }

    /// Freeze an [`StlMap`] into the `*STLM` card.
    ///
    /// Consumes the builder, so the mapping cannot change after the card
    /// exists. Fails if the map has no rows or any row's volume fraction
    /// lies outside `[0, 1]`.
    pub fn stl_map(map: StlMap) -> Result<Self, DeckError> {
        map.validate()?;
        Ok(Card::new(
            CardKeyword::Known(CardKind::StlMap),
            CardValue::StlMap(map.into_rows()),
        ))
    }

    /// Freeze a [`ConvectionTable`] into the `*CONV` card.
    ///
    /// Consumes the builder. Fails if the table has fewer than two points
    /// or its temperatures are not strictly increasing (the solver
    /// interpolates over the table).
    pub fn convection(table: ConvectionTable) -> Result<Self, DeckError> {
        table.validate()?;
        Ok(Card::new(
            CardKeyword::Known(CardKind::Convection),
            CardValue::Convection(table.into_points()),
        ))
    }

    /// Create the `*SBXY` card extending the build plate in XY.
    ///
    /// Arguments are relative extensions in mm per the host view cube:
    /// left is -x, right is +x, front is -y, back is +y. Negative values
    /// shrink the plate. Fails if any value is NaN or infinite.
    pub fn build_plate_xy_extension(
        left: f64,
        right: f64,
        front: f64,
        back: f64,
    ) -> Result<Self, DeckError> {
        for (label, v) in [
            ("left", left),
            ("right", right),
            ("front", front),
            ("back", back),
        ] {
            if !v.is_finite() {
                return Err(DeckError::invalid(format!(
                    "{} extension must be finite, got {v}",
                    label
                )));
            }
        }
        Ok(Card::new(
            CardKeyword::Known(CardKind::BuildPlateXyExtension),
            CardValue::XyExtension {
                left,
                right,
                front,
                back,
            },
        ))
    }
}

//! The card value type.
//!
//! A `Card` is an immutable (keyword, value) pair. The value is a tagged
//! union over the argument shapes the format supports; constructors in
//! `factory` guarantee the variant matches the keyword's declared shape,
//! so the pairing can never be observed in a mismatched state.
//!
//! Rendering: `argument_text` gives the argument portion alone, and the
//! `Display` impl emits the full record (keyword line, then one data line
//! per composite row/point). Scalar arguments render with `Display`
//! formatting, so real values round-trip through their shortest decimal
//! form.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::composites::{ConvectionPoint, StlMapRow};

use super::kind::{ArgShape, CardKind};

/// A card's keyword: a member of the closed catalogue, or a free-form
/// name supplied through [`Card::generic`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKeyword {
    /// A keyword from the fixed catalogue.
    Known(CardKind),
    /// A caller-supplied keyword, emitted verbatim.
    Generic(String),
}

impl CardKeyword {
    /// The keyword text as emitted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            CardKeyword::Known(kind) => kind.token(),
            CardKeyword::Generic(name) => name,
        }
    }
}

/// A card's argument payload.
///
/// One variant per argument shape in [`ArgShape`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardValue {
    /// No argument.
    None,
    /// Single integer argument.
    Int(i32),
    /// Single real argument.
    Real(f64),
    /// Single string argument.
    Str(String),
    /// String list argument (file name lists).
    StrArray(SmallVec<[String; 4]>),
    /// Build plate top and bottom Z coordinates in mm.
    ZBounds {
        /// Top of the build plate; matches the bottom Z of parts/supports.
        z_top: f64,
        /// Bottom of the build plate.
        z_bottom: f64,
    },
    /// Disk check toggle. Negative `i1` disables the check; `r1` is an
    /// unused placeholder kept for format compatibility.
    DiskCheck {
        /// Toggle value.
        i1: i32,
        /// Placeholder, emitted but not interpreted.
        r1: f64,
    },
    /// Frozen `*STLM` mapping rows.
    StlMap(Vec<StlMapRow>),
    /// Frozen `*CONV` table points.
    Convection(Vec<ConvectionPoint>),
    /// Relative build plate XY extensions in mm, per the host view cube:
    /// left is -x, right is +x, front is -y, back is +y.
    XyExtension {
        /// Extension toward -x.
        left: f64,
        /// Extension toward +x.
        right: f64,
        /// Extension toward -y.
        front: f64,
        /// Extension toward +y.
        back: f64,
    },
}

impl CardValue {
    /// The shape this value carries.
    #[must_use]
    pub fn shape(&self) -> ArgShape {
        match self {
            CardValue::None => ArgShape::None,
            CardValue::Int(_) => ArgShape::Int,
            CardValue::Real(_) => ArgShape::Real,
            CardValue::Str(_) => ArgShape::Str,
            CardValue::StrArray(_) => ArgShape::StrArray,
            CardValue::ZBounds { .. } => ArgShape::BuildPlateZBounds,
            CardValue::DiskCheck { .. } => ArgShape::DiskCheck,
            CardValue::StlMap(_) => ArgShape::StlMap,
            CardValue::Convection(_) => ArgShape::Convection,
            CardValue::XyExtension { .. } => ArgShape::BuildPlateXyExtension,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i32> {
        match self {
            CardValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as real if this is a Real value.
    #[must_use]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            CardValue::Real(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Str value.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CardValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Get as string slice if this is a StrArray value.
    #[must_use]
    pub fn as_str_array(&self) -> Option<&[String]> {
        match self {
            CardValue::StrArray(v) => Some(v),
            _ => None,
        }
    }
}

/// One keyword + argument record of a solver input deck.
///
/// Cards are immutable once constructed. They are created through the
/// constructors in this module's `factory` half ([`Card::generic`],
/// [`Card::void`], [`Card::int`], ...) and owned by whichever [`Deck`]
/// they are appended to.
///
/// ## Example
///
/// ```
/// use additive_fea_deck::cards::{Card, CardKind};
///
/// let title = Card::string(CardKind::Title, "Test Part").unwrap();
/// assert_eq!(title.name(), "*TITLE");
/// assert_eq!(title.argument_text(), "Test Part");
/// assert_eq!(title.to_string(), "*TITLE Test Part");
/// ```
///
/// [`Deck`]: crate::deck::Deck
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    keyword: CardKeyword,
    value: CardValue,
}

impl Card {
    /// Only `factory` constructs cards; the invariant that `value`'s shape
    /// matches the keyword is established there.
    pub(super) fn new(keyword: CardKeyword, value: CardValue) -> Self {
        Self { keyword, value }
    }

    /// The card's keyword.
    #[must_use]
    pub fn keyword(&self) -> &CardKeyword {
        &self.keyword
    }

    /// The catalogue kind, or `None` for generic cards.
    #[must_use]
    pub fn kind(&self) -> Option<CardKind> {
        match &self.keyword {
            CardKeyword::Known(kind) => Some(*kind),
            CardKeyword::Generic(_) => None,
        }
    }

    /// The keyword text as emitted (token, or the generic name verbatim).
    #[must_use]
    pub fn name(&self) -> &str {
        self.keyword.as_str()
    }

    /// The argument payload.
    #[must_use]
    pub fn value(&self) -> &CardValue {
        &self.value
    }

    /// The rendered argument portion of the record.
    ///
    /// Empty for void cards. Composite cards render one data line per
    /// row/point, in insertion order, joined with `\n`.
    #[must_use]
    pub fn argument_text(&self) -> String {
        match &self.value {
            CardValue::None => String::new(),
            CardValue::Int(v) => v.to_string(),
            CardValue::Real(v) => v.to_string(),
            CardValue::Str(s) => s.clone(),
            CardValue::StrArray(values) => values.join(" "),
            CardValue::ZBounds { z_top, z_bottom } => format!("{z_top} {z_bottom}"),
            CardValue::DiskCheck { i1, r1 } => format!("{i1} {r1}"),
            CardValue::StlMap(rows) => {
                let lines: Vec<String> = rows
                    .iter()
                    .map(|r| {
                        format!(
                            "{} {} {} {}",
                            r.configuration, r.prm, r.material, r.volume_fraction
                        )
                    })
                    .collect();
                lines.join("\n")
            }
            CardValue::Convection(points) => {
                let lines: Vec<String> = points
                    .iter()
                    .map(|p| format!("{} {}", p.temperature, p.coefficient))
                    .collect();
                lines.join("\n")
            }
            CardValue::XyExtension {
                left,
                right,
                front,
                back,
            } => format!("{left} {right} {front} {back}"),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        match &self.value {
            CardValue::None => Ok(()),
            // Composite cards: keyword line, then one data line per row.
            CardValue::StlMap(_) | CardValue::Convection(_) => {
                write!(f, "\n{}", self.argument_text())
            }
            _ => write!(f, " {}", self.argument_text()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_shape() {
        assert_eq!(CardValue::None.shape(), ArgShape::None);
        assert_eq!(CardValue::Int(3).shape(), ArgShape::Int);
        assert_eq!(CardValue::Real(0.5).shape(), ArgShape::Real);
        assert_eq!(
            CardValue::ZBounds {
                z_top: 0.0,
                z_bottom: -5.0
            }
            .shape(),
            ArgShape::BuildPlateZBounds
        );
    }

    #[test]
    fn test_value_accessors() {
        let v = CardValue::Int(7);
        assert_eq!(v.as_int(), Some(7));
        assert_eq!(v.as_real(), None);

        let v = CardValue::Str("abc".to_string());
        assert_eq!(v.as_str(), Some("abc"));
        assert_eq!(v.as_int(), None);
    }

    #[test]
    fn test_scalar_rendering() {
        let card = Card::int(CardKind::LayersPerElement, 10).unwrap();
        assert_eq!(card.argument_text(), "10");
        assert_eq!(card.to_string(), "*LPEL 10");

        let card = Card::real(CardKind::StlTolerance, 0.01).unwrap();
        assert_eq!(card.argument_text(), "0.01");
        assert_eq!(card.to_string(), "*STOL 0.01");
    }

    #[test]
    fn test_void_rendering_has_no_trailing_space() {
        let card = Card::void(CardKind::End).unwrap();
        assert_eq!(card.argument_text(), "");
        assert_eq!(card.to_string(), "*END");
    }

    #[test]
    fn test_string_array_rendering() {
        let card = Card::string_array(
            CardKind::Stls,
            vec!["part.stl".to_string(), "support.stl".to_string()],
        )
        .unwrap();
        assert_eq!(card.argument_text(), "part.stl support.stl");
        assert_eq!(card.to_string(), "*STLS part.stl support.stl");
    }

    #[test]
    fn test_generic_keyword_is_verbatim() {
        let card = Card::generic("*XFOO", "3 4").unwrap();
        assert_eq!(card.kind(), None);
        assert_eq!(card.name(), "*XFOO");
        assert_eq!(card.to_string(), "*XFOO 3 4");
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::real(CardKind::AmbientTemperature, 22.5).unwrap();

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }
}

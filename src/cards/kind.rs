//! The closed keyword catalogue.
//!
//! `CardKind` enumerates every keyword the builder models, and
//! `CardKind::shape` is the single keyword-to-argument-shape table that the
//! shape-restricted constructors consult. Keywords outside this set go
//! through [`Card::generic`] instead.
//!
//! [`Card::generic`]: crate::cards::Card::generic

use serde::{Deserialize, Serialize};

/// The argument shape a keyword expects.
///
/// A [`Card`]'s value variant always matches its keyword's shape;
/// constructors enforce this, so a mismatched card cannot exist.
///
/// [`Card`]: crate::cards::Card
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgShape {
    /// No argument (the card is the keyword alone).
    None,
    /// Single integer argument.
    Int,
    /// Single real argument.
    Real,
    /// Single string argument.
    Str,
    /// One or more string arguments.
    StrArray,
    /// Build plate top/bottom Z coordinates (`*DDM!`).
    BuildPlateZBounds,
    /// Disk check toggle with its placeholder real (`*IOBN`).
    DiskCheck,
    /// STL mapping rows (`*STLM`).
    StlMap,
    /// Temperature/coefficient table (`*CONV`).
    Convection,
    /// Relative build plate XY extensions (`*SBXY`).
    BuildPlateXyExtension,
}

/// A keyword in the additive FEA input format.
///
/// The set is fixed and closed; each kind knows its textual token and the
/// argument shape it takes.
///
/// ## Example
///
/// ```
/// use additive_fea_deck::cards::{ArgShape, CardKind};
///
/// assert_eq!(CardKind::Title.token(), "*TITLE");
/// assert_eq!(CardKind::Title.shape(), ArgShape::Str);
/// assert_eq!(CardKind::End.shape(), ArgShape::None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Request binary result output.
    BinaryOutput,
    /// Request Ensight-format output.
    EnsightOutput,
    /// Disable off-core solving.
    NoOffCore,
    /// Restrict the solve to one core.
    OnCore1,
    /// Terminates the deck.
    End,
    /// Analysis type selector.
    AnalysisType,
    /// Powder layers collapsed into one element layer.
    LayersPerElement,
    /// Number of mesh coarsening generations.
    CoarseningGenerations,
    /// Adaptivity level.
    Adaptivity,
    /// STL facet tolerance in mm.
    StlTolerance,
    /// Ambient temperature.
    AmbientTemperature,
    /// Final (cool-down) temperature.
    FinalTemperature,
    /// Deck title line.
    Title,
    /// STL file list.
    Stls,
    /// PRM file list.
    Prms,
    /// Build plate top/bottom Z coordinates.
    BuildPlateZBounds,
    /// Disk space check toggle.
    DiskCheck,
    /// Body-to-configuration/PRM/material mapping.
    StlMap,
    /// Convection boundary condition table.
    Convection,
    /// Relative build plate XY extensions.
    BuildPlateXyExtension,
}

impl CardKind {
    /// The keyword token as it appears in the input file.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            CardKind::BinaryOutput => "*BINO",
            CardKind::EnsightOutput => "*ENSO",
            CardKind::NoOffCore => "*NOOC",
            CardKind::OnCore1 => "*ONC1",
            CardKind::End => "*END",
            CardKind::AnalysisType => "*ATYP",
            CardKind::LayersPerElement => "*LPEL",
            CardKind::CoarseningGenerations => "*CGEN",
            CardKind::Adaptivity => "*ADAP",
            CardKind::StlTolerance => "*STOL",
            CardKind::AmbientTemperature => "*TAMB",
            CardKind::FinalTemperature => "*TFIN",
            CardKind::Title => "*TITLE",
            CardKind::Stls => "*STLS",
            CardKind::Prms => "*PRMS",
            CardKind::BuildPlateZBounds => "*DDM!",
            CardKind::DiskCheck => "*IOBN",
            CardKind::StlMap => "*STLM",
            CardKind::Convection => "*CONV",
            CardKind::BuildPlateXyExtension => "*SBXY",
        }
    }

    /// The argument shape this keyword expects.
    #[must_use]
    pub const fn shape(self) -> ArgShape {
        match self {
            CardKind::BinaryOutput
            | CardKind::EnsightOutput
            | CardKind::NoOffCore
            | CardKind::OnCore1
            | CardKind::End => ArgShape::None,

            CardKind::AnalysisType
            | CardKind::LayersPerElement
            | CardKind::CoarseningGenerations
            | CardKind::Adaptivity => ArgShape::Int,

            CardKind::StlTolerance
            | CardKind::AmbientTemperature
            | CardKind::FinalTemperature => ArgShape::Real,

            CardKind::Title => ArgShape::Str,

            CardKind::Stls | CardKind::Prms => ArgShape::StrArray,

            CardKind::BuildPlateZBounds => ArgShape::BuildPlateZBounds,
            CardKind::DiskCheck => ArgShape::DiskCheck,
            CardKind::StlMap => ArgShape::StlMap,
            CardKind::Convection => ArgShape::Convection,
            CardKind::BuildPlateXyExtension => ArgShape::BuildPlateXyExtension,
        }
    }

    /// All keyword kinds, in catalogue order.
    pub const ALL: [CardKind; 20] = [
        CardKind::BinaryOutput,
        CardKind::EnsightOutput,
        CardKind::NoOffCore,
        CardKind::OnCore1,
        CardKind::End,
        CardKind::AnalysisType,
        CardKind::LayersPerElement,
        CardKind::CoarseningGenerations,
        CardKind::Adaptivity,
        CardKind::StlTolerance,
        CardKind::AmbientTemperature,
        CardKind::FinalTemperature,
        CardKind::Title,
        CardKind::Stls,
        CardKind::Prms,
        CardKind::BuildPlateZBounds,
        CardKind::DiskCheck,
        CardKind::StlMap,
        CardKind::Convection,
        CardKind::BuildPlateXyExtension,
    ];
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

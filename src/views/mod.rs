//! View Catalogue - Puzzles, Views and Their Facet Layouts
//!
//! Each render kind owns a dimension rule, an ordered list of facet slots
//! and a geometry engine.

pub mod flat;
pub mod isometric;
pub mod skewb;
pub mod unfolded;

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::color::{self, Fill, BACKGROUND, TRANSPARENT, UNSPECIFIED};
use crate::error::CubeError;
use crate::facet::Facet;
use crate::spec::{CubeSize, CubeSpec, DimensionRule, MAX_DIMENSION, MIN_DIMENSION};
use crate::svg::{Document, Element};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Puzzle {
    Cube,
    Skewb,
}

impl Puzzle {
    pub fn as_str(self) -> &'static str {
        match self {
            Puzzle::Cube => "cube",
            Puzzle::Skewb => "skewb",
        }
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Puzzle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cube" => Ok(Puzzle::Cube),
            "skewb" => Ok(Puzzle::Skewb),
            other => Err(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderKind {
    Flat,
    Isometric,
    Unfolded,
    SkewbIsometric,
}

/// Grid extent of a facet along one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extent {
    X,
    Y,
    Z,
    Fixed(usize),
}

impl Extent {
    fn resolve(self, size: CubeSize) -> usize {
        match self {
            Extent::X => size.x as usize,
            Extent::Y => size.y as usize,
            Extent::Z => size.z as usize,
            Extent::Fixed(n) => n,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    pub cols: Extent,
    pub rows: Extent,
}

impl Shape {
    pub fn resolve(self, size: CubeSize) -> (usize, usize) {
        (self.cols.resolve(size), self.rows.resolve(size))
    }
}

/// One facet of a view: which facet, its grid shape, and the code used when
/// the color string has no entry for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FacetSlot {
    pub facet: Facet,
    pub shape: Shape,
    pub default: char,
}

const fn slot(facet: Facet, cols: Extent, rows: Extent, default: char) -> FacetSlot {
    FacetSlot { facet, shape: Shape { cols, rows }, default }
}

use Extent::{Fixed, X, Y, Z};

const FLAT_SLOTS: [FacetSlot; 6] = [
    slot(Facet::Front, X, Y, UNSPECIFIED),
    slot(Facet::Left, Fixed(1), Y, TRANSPARENT),
    slot(Facet::Top, X, Fixed(1), TRANSPARENT),
    slot(Facet::Right, Fixed(1), Y, TRANSPARENT),
    slot(Facet::Bottom, X, Fixed(1), TRANSPARENT),
    slot(Facet::Base, Fixed(1), Fixed(1), BACKGROUND),
];

const ISOMETRIC_SLOTS: [FacetSlot; 4] = [
    slot(Facet::Front, X, Y, UNSPECIFIED),
    slot(Facet::Top, Z, X, TRANSPARENT),
    slot(Facet::Right, Z, Y, TRANSPARENT),
    slot(Facet::Base, Fixed(1), Fixed(1), BACKGROUND),
];

const UNFOLDED_SLOTS: [FacetSlot; 7] = [
    slot(Facet::Front, X, Y, UNSPECIFIED),
    slot(Facet::Left, Z, Y, TRANSPARENT),
    slot(Facet::Top, X, Z, TRANSPARENT),
    slot(Facet::Right, Z, Y, TRANSPARENT),
    slot(Facet::Bottom, X, Z, TRANSPARENT),
    slot(Facet::Back, X, Y, TRANSPARENT),
    slot(Facet::Base, Fixed(1), Fixed(1), BACKGROUND),
];

const SKEWB_SLOTS: [FacetSlot; 4] = [
    slot(Facet::Front, Fixed(skewb::PIECES), Fixed(1), UNSPECIFIED),
    slot(Facet::Top, Fixed(skewb::PIECES), Fixed(1), TRANSPARENT),
    slot(Facet::Right, Fixed(skewb::PIECES), Fixed(1), TRANSPARENT),
    slot(Facet::Base, Fixed(1), Fixed(1), BACKGROUND),
];

impl RenderKind {
    pub const ALL: [RenderKind; 4] = [
        RenderKind::Flat,
        RenderKind::Isometric,
        RenderKind::Unfolded,
        RenderKind::SkewbIsometric,
    ];

    /// Look up the render kind serving `view` for `puzzle`.
    pub fn lookup(puzzle: Puzzle, view: &str) -> Option<Self> {
        match (puzzle, view) {
            (Puzzle::Cube, "flat") => Some(RenderKind::Flat),
            (Puzzle::Cube, "isometric") => Some(RenderKind::Isometric),
            (Puzzle::Cube, "unfolded") => Some(RenderKind::Unfolded),
            (Puzzle::Skewb, "isometric") => Some(RenderKind::SkewbIsometric),
            _ => None,
        }
    }

    pub fn puzzle(self) -> Puzzle {
        match self {
            RenderKind::SkewbIsometric => Puzzle::Skewb,
            _ => Puzzle::Cube,
        }
    }

    pub fn view_name(self) -> &'static str {
        match self {
            RenderKind::Flat => "flat",
            RenderKind::Isometric | RenderKind::SkewbIsometric => "isometric",
            RenderKind::Unfolded => "unfolded",
        }
    }

    pub fn dimension_rule(self) -> DimensionRule {
        match self {
            RenderKind::Flat => DimensionRule { arity: 2, min: MIN_DIMENSION, max: MAX_DIMENSION },
            RenderKind::Isometric | RenderKind::Unfolded => {
                DimensionRule { arity: 3, min: MIN_DIMENSION, max: MAX_DIMENSION }
            }
            RenderKind::SkewbIsometric => DimensionRule { arity: 1, min: 1, max: 1 },
        }
    }

    /// Facets in canonical order. The base is always last.
    pub fn facet_slots(self) -> &'static [FacetSlot] {
        match self {
            RenderKind::Flat => &FLAT_SLOTS,
            RenderKind::Isometric => &ISOMETRIC_SLOTS,
            RenderKind::Unfolded => &UNFOLDED_SLOTS,
            RenderKind::SkewbIsometric => &SKEWB_SLOTS,
        }
    }
}

/// Build the document for a parsed spec. Every cell color is resolved
/// before anything is serialized.
pub fn build(spec: &CubeSpec) -> Result<Document, CubeError> {
    match spec.kind() {
        RenderKind::Flat => flat::build(spec),
        RenderKind::Isometric => isometric::build(spec),
        RenderKind::Unfolded => unfolded::build(spec),
        RenderKind::SkewbIsometric => skewb::build(spec),
    }
}

impl fmt::Display for RenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.puzzle(), self.view_name())
    }
}

/// Catalogue row for one supported (puzzle, view) pair.
#[derive(Debug, Clone, Serialize)]
pub struct ViewInfo {
    pub puzzle: Puzzle,
    pub view: &'static str,
    pub kind: RenderKind,
    pub dimensions: usize,
    pub facets: Vec<&'static str>,
}

pub fn catalogue() -> Vec<ViewInfo> {
    RenderKind::ALL
        .iter()
        .map(|&kind| ViewInfo {
            puzzle: kind.puzzle(),
            view: kind.view_name(),
            kind,
            dimensions: kind.dimension_rule().arity,
            facets: kind.facet_slots().iter().map(|s| s.facet.name(kind)).collect(),
        })
        .collect()
}

// --- Shared helpers for the geometry engines ---

pub(crate) fn base_fill(spec: &CubeSpec) -> Result<Fill, CubeError> {
    color::resolve(spec.base_code())
}

pub(crate) fn cell_id(facet: Facet, kind: RenderKind, col: usize, row: usize) -> String {
    format!("{}-{}x{}", facet.name(kind), col + 1, row + 1)
}

pub(crate) fn group(facet: Facet, kind: RenderKind, children: Vec<Element>) -> Element {
    Element::Group { id: facet.name(kind).to_string(), children }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(RenderKind::lookup(Puzzle::Cube, "flat"), Some(RenderKind::Flat));
        assert_eq!(
            RenderKind::lookup(Puzzle::Skewb, "isometric"),
            Some(RenderKind::SkewbIsometric)
        );
        assert_eq!(RenderKind::lookup(Puzzle::Skewb, "flat"), None);
        assert_eq!(RenderKind::lookup(Puzzle::Cube, "Flat"), None);
    }

    #[test]
    fn test_base_slot_is_last() {
        for kind in RenderKind::ALL {
            let slots = kind.facet_slots();
            assert_eq!(slots.last().map(|s| s.facet), Some(Facet::Base));
            assert_eq!(slots[0].facet, Facet::Front);
        }
    }

    #[test]
    fn test_catalogue_lists_every_kind() {
        let views = catalogue();
        assert_eq!(views.len(), 4);
        let flat = &views[0];
        assert_eq!(flat.view, "flat");
        assert_eq!(flat.facets, vec!["front", "left", "top", "right", "bottom", "base"]);
        let json = serde_json::to_value(&views[3]).unwrap();
        assert_eq!(json["puzzle"], "skewb");
        assert_eq!(json["kind"], "skewb_isometric");
    }

    #[test]
    fn test_puzzle_from_str() {
        assert_eq!("skewb".parse::<Puzzle>(), Ok(Puzzle::Skewb));
        assert!("pyraminx".parse::<Puzzle>().is_err());
    }
}

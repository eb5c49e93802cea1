//! Cube Spec - Parsing the Two Request Strings
//!
//! A spec is built once per request from the dimension and color strings,
//! is never mutated, and is dropped when the render returns.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::color::BACKGROUND;
use crate::error::DimensionError;
use crate::facet::Facet;
use crate::grid::ColorGrid;
use crate::views::{FacetSlot, RenderKind};

pub const MIN_DIMENSION: u32 = 1;
pub const MAX_DIMENSION: u32 = 64;

/// Cube size along each axis. Views that use fewer axes leave the rest at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CubeSize {
    pub x: u32,
    pub y: u32,
    pub z: u32,
}

impl CubeSize {
    pub fn new(x: u32, y: u32, z: u32) -> Self {
        Self { x, y, z }
    }

    pub const UNIT: CubeSize = CubeSize { x: 1, y: 1, z: 1 };
}

/// Arity and bounds a dimension string must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DimensionRule {
    pub arity: usize,
    pub min: u32,
    pub max: u32,
}

impl DimensionRule {
    pub fn apply(&self, input: &str) -> Result<Vec<u32>, DimensionError> {
        let fields: Vec<&str> = input.split('x').collect();
        if fields.len() != self.arity {
            return Err(DimensionError::FieldCount {
                expected: self.arity,
                actual: fields.len(),
            });
        }

        let mut values = Vec::with_capacity(fields.len());
        for field in fields {
            let value: i64 = field
                .parse()
                .map_err(|_| DimensionError::NotAnInteger(field.to_string()))?;
            if value < i64::from(self.min) || value > i64::from(self.max) {
                return Err(DimensionError::OutOfRange {
                    value,
                    min: self.min,
                    max: self.max,
                });
            }
            values.push(value as u32);
        }
        Ok(values)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CubeSpec {
    kind: RenderKind,
    size: CubeSize,
    grids: BTreeMap<Facet, ColorGrid>,
}

impl CubeSpec {
    /// Validate the dimensions, then fit one grid per facet of the view.
    pub fn parse(kind: RenderKind, dimensions: &str, colors: &str) -> Result<Self, DimensionError> {
        let values = kind.dimension_rule().apply(dimensions)?;
        let size = match values.as_slice() {
            [x, y, z] => CubeSize::new(*x, *y, *z),
            [x, y] => CubeSize::new(*x, *y, 1),
            _ => CubeSize::UNIT,
        };

        let colors = colors.to_ascii_uppercase();
        let entries: Vec<&str> = colors.split('-').collect();

        let grids = kind
            .facet_slots()
            .iter()
            .enumerate()
            .map(|(index, slot)| {
                let codes = pick_entry(kind, &entries, index, slot);
                let (cols, rows) = slot.shape.resolve(size);
                (slot.facet, ColorGrid::build(&codes, cols, rows))
            })
            .collect();

        Ok(Self { kind, size, grids })
    }

    pub fn kind(&self) -> RenderKind { self.kind }

    pub fn size(&self) -> CubeSize { self.size }

    pub fn grid(&self, facet: Facet) -> Option<&ColorGrid> {
        self.grids.get(&facet)
    }

    /// Every facet except the base, in the view's canonical order.
    pub fn sides(&self) -> impl Iterator<Item = (Facet, &ColorGrid)> + '_ {
        self.kind
            .facet_slots()
            .iter()
            .filter(|slot| slot.facet != Facet::Base)
            .filter_map(|slot| self.grids.get(&slot.facet).map(|grid| (slot.facet, grid)))
    }

    /// The background code from the 1x1 base grid.
    pub fn base_code(&self) -> char {
        self.grid(Facet::Base)
            .and_then(|grid| grid.get(0, 0))
            .unwrap_or(BACKGROUND)
    }
}

fn pick_entry(kind: RenderKind, entries: &[&str], index: usize, slot: &FacetSlot) -> String {
    match entries.get(index) {
        // The skewb has always treated an empty entry as "not given".
        Some(entry) if entry.is_empty() && kind == RenderKind::SkewbIsometric => {
            slot.default.to_string()
        }
        Some(entry) => entry.to_string(),
        None => slot.default.to_string(),
    }
}

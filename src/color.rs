//! Color Registry - Single-Character Codes to SVG Fills
//!
//! The palette is a fixed, read-only table shared by every render. Lookup is
//! the only place an invalid color code is rejected.

use serde::Serialize;
use std::fmt;

use crate::error::CubeError;

/// Code used to pad grids whose color run is too short.
pub const UNSPECIFIED: char = 'X';

/// Code used for side facets the caller did not mention.
pub const TRANSPARENT: char = 'T';

/// Code used for the background when the caller did not mention it.
pub const BACKGROUND: char = 'K';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    Rgb(u8, u8, u8),
    Transparent,
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fill::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
            Fill::Transparent => f.write_str("transparent"),
        }
    }
}

impl Serialize for Fill {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct PaletteEntry {
    pub code: char,
    pub name: &'static str,
    pub fill: Fill,
}

const fn entry(code: char, name: &'static str, fill: Fill) -> PaletteEntry {
    PaletteEntry { code, name, fill }
}

static PALETTE: [PaletteEntry; 9] = [
    entry('R', "red", Fill::Rgb(213, 0, 0)),
    entry('G', "green", Fill::Rgb(0, 153, 0)),
    entry('B', "blue", Fill::Rgb(52, 52, 212)),
    entry('Y', "yellow", Fill::Rgb(255, 255, 0)),
    entry('W', "white", Fill::Rgb(223, 223, 223)),
    entry('O', "orange", Fill::Rgb(239, 108, 0)),
    entry('X', "gray", Fill::Rgb(86, 86, 86)),
    entry('K', "black", Fill::Rgb(0, 0, 0)),
    entry('T', "transparent", Fill::Transparent),
];

/// The full palette in display order.
pub fn palette() -> &'static [PaletteEntry] {
    &PALETTE
}

/// Resolve a code to its fill. Lowercase codes are accepted.
pub fn resolve(code: char) -> Result<Fill, CubeError> {
    let upper = code.to_ascii_uppercase();
    PALETTE
        .iter()
        .find(|e| e.code == upper)
        .map(|e| e.fill)
        .ok_or(CubeError::UnknownColor(code))
}

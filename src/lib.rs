//! cube-svg - Cube Puzzle SVG Renderer
//!
//! Turns a dimension string (`3x3`, `3x3x3`, `1`) and a dash-separated color
//! string (`R-G-BBBWWW-K`) into an SVG picture of a cube puzzle.
//!
//! # Guarantees
//! 1. Parsing is strict and total: bad input is rejected before any markup
//!    is produced.
//! 2. Output is deterministic: the same strings give byte-identical markup.
//! 3. Each request is independent; the palette is the only shared data and
//!    it is read-only.
//!
//! ```
//! use cube_svg::{render, Puzzle};
//!
//! let out = render(Puzzle::Cube, "flat", "2x2", "R").unwrap();
//! assert!(out.svg.contains(r#"viewBox="0 0 112 112""#));
//! ```

pub mod color;
pub mod digest;
pub mod error;
pub mod facet;
pub mod grid;
pub mod pipeline;
pub mod server;
pub mod spec;
pub mod svg;
pub mod views;

pub use color::{palette, Fill, PaletteEntry};
pub use error::{CubeError, DimensionError};
pub use facet::Facet;
pub use grid::ColorGrid;
pub use pipeline::{render, render_kind, render_named, PipelineError, RenderedSvg};
pub use spec::{CubeSize, CubeSpec};
pub use views::{catalogue, Puzzle, RenderKind, ViewInfo};

//! Render Pipeline - Single Entry Point
//!
//! Parse, build, then serialize. Errors from either parsing step surface
//! before a single byte of markup exists.

use std::path::Path;

use base64::Engine;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::digest::sha256_hex;
use crate::error::CubeError;
use crate::spec::{CubeSize, CubeSpec};
use crate::views::{self, Puzzle, RenderKind};

pub const CONTENT_TYPE: &str = "image/svg+xml";

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Unknown view parameter: {0}")]
    UnknownView(String),

    #[error("Unknown puzzle: {0}")]
    UnknownPuzzle(String),

    #[error(transparent)]
    Render(#[from] CubeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSvg {
    pub kind: RenderKind,
    pub size: CubeSize,
    pub digest: String,
    pub svg: String,
}

impl RenderedSvg {
    /// `data:` URI with the markup base64-encoded.
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            CONTENT_TYPE,
            base64::engine::general_purpose::STANDARD.encode(self.svg.as_bytes())
        )
    }

    pub fn save(&self, path: &Path) -> Result<(), PipelineError> {
        std::fs::write(path, self.svg.as_bytes())?;
        Ok(())
    }
}

/// Render a spec that has already been parsed.
pub fn render_spec(spec: &CubeSpec) -> Result<RenderedSvg, CubeError> {
    let svg = views::build(spec)?.to_markup();
    debug!(kind = %spec.kind(), size = ?spec.size(), bytes = svg.len(), "rendered");
    Ok(RenderedSvg {
        kind: spec.kind(),
        size: spec.size(),
        digest: sha256_hex(svg.as_bytes()),
        svg,
    })
}

/// Render one kind from the two request strings.
pub fn render_kind(kind: RenderKind, dimensions: &str, colors: &str) -> Result<RenderedSvg, CubeError> {
    let spec = CubeSpec::parse(kind, dimensions, colors)?;
    render_spec(&spec)
}

/// Render `view` of `puzzle` from the dimension and color strings.
pub fn render(
    puzzle: Puzzle,
    view: &str,
    dimensions: &str,
    colors: &str,
) -> Result<RenderedSvg, PipelineError> {
    let kind = RenderKind::lookup(puzzle, view)
        .ok_or_else(|| PipelineError::UnknownView(view.to_string()))?;
    Ok(render_kind(kind, dimensions, colors)?)
}

/// Same as [`render`], with the puzzle given by name.
pub fn render_named(
    puzzle: &str,
    view: &str,
    dimensions: &str,
    colors: &str,
) -> Result<RenderedSvg, PipelineError> {
    let puzzle: Puzzle = puzzle.parse().map_err(PipelineError::UnknownPuzzle)?;
    render(puzzle, view, dimensions, colors)
}

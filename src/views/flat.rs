//! Flat View - Front Grid With Thin Side Strips
//!
//! The front facet is a regular grid. Each side facet is a 6-unit strip set
//! against the matching edge of the grid. Strips never grow with the axis
//! they are thin along.

use crate::color;
use crate::error::CubeError;
use crate::facet::Facet;
use crate::spec::{CubeSize, CubeSpec};
use crate::svg::{Document, Element, Point};
use crate::views::{base_fill, cell_id, group, RenderKind};

pub const PITCH: f64 = 49.0;
pub const CELL: f64 = 43.0;
pub const CELL_RADIUS: f64 = 6.21;
pub const MARGIN: f64 = 10.0;
pub const STRIP: f64 = 6.0;
pub const STRIP_RADIUS: f64 = 2.32;
pub const FRAME_INSET: f64 = 3.0;
pub const FRAME_RADIUS: f64 = 7.42;

/// Canvas `(width, height)`: `14 + N*49` per axis. The last cell on an
/// axis has no trailing gap.
pub fn canvas(size: CubeSize) -> (f64, f64) {
    let extent = |n: u32| 2.0 * MARGIN + f64::from(n) * PITCH - (PITCH - CELL);
    (extent(size.x), extent(size.y))
}

/// Width and height of the background frame.
pub fn frame(size: CubeSize) -> (f64, f64) {
    let (w, h) = canvas(size);
    (w - 2.0 * FRAME_INSET, h - 2.0 * FRAME_INSET)
}

/// Origin and `(width, height)` of one cell.
pub fn placement(facet: Facet, size: CubeSize, col: usize, row: usize) -> (Point, f64, f64) {
    let step_x = col as f64 * PITCH;
    let step_y = row as f64 * PITCH;
    let (far_x, far_y) = frame(size);
    match facet {
        Facet::Left => (Point::new(step_x, MARGIN + step_y), STRIP, CELL),
        Facet::Right => (Point::new(far_x + step_x, MARGIN + step_y), STRIP, CELL),
        Facet::Top => (Point::new(MARGIN + step_x, step_y), CELL, STRIP),
        Facet::Bottom => (Point::new(MARGIN + step_x, far_y + step_y), CELL, STRIP),
        _ => (Point::new(MARGIN + step_x, MARGIN + step_y), CELL, CELL),
    }
}

pub fn build(spec: &CubeSpec) -> Result<Document, CubeError> {
    let kind = RenderKind::Flat;
    let size = spec.size();
    let (width, height) = canvas(size);
    let (frame_w, frame_h) = frame(size);

    let mut doc = Document::new(width, height);
    doc.push(Element::Rect {
        id: "base".to_string(),
        origin: Point::new(FRAME_INSET, FRAME_INSET),
        width: frame_w,
        height: frame_h,
        radius: FRAME_RADIUS,
        fill: base_fill(spec)?,
    });

    for (facet, grid) in spec.sides() {
        let radius = if facet == Facet::Front { CELL_RADIUS } else { STRIP_RADIUS };
        let mut cells = Vec::with_capacity(grid.cols() * grid.rows());
        for (col, row, code) in grid.cells() {
            let (origin, width, height) = placement(facet, size, col, row);
            cells.push(Element::Rect {
                id: cell_id(facet, kind, col, row),
                origin,
                width,
                height,
                radius,
                fill: color::resolve(code)?,
            });
        }
        doc.push(group(facet, kind, cells));
    }

    Ok(doc)
}

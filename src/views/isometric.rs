//! Isometric View - Three Projected Facets
//!
//! Front, up and right are drawn as parallelograms. A cell's anchor is the
//! facet base plus one step per column and one per row; the cell outline is
//! a fixed path template translated to that anchor. The base offsets, the
//! canvas and the hexagonal frame are linear in the cube size.

use crate::color;
use crate::error::CubeError;
use crate::facet::Facet;
use crate::spec::{CubeSize, CubeSpec};
use crate::svg::{Document, Element, PathData, Point};
use crate::views::{base_fill, cell_id, group, RenderKind};

/// Horizontal run of one cell edge.
pub const RUN: f64 = 42.43;
/// Vertical rise of one cell edge.
pub const RISE: f64 = 24.5;
/// Height of one vertical cell edge.
pub const EDGE: f64 = 49.0;

const FRONT_CELL: &str = "v29.69c0,3.67-2.25,5.37-5,3.78l-27.23-15.72c-2.75-1.59-5-5.9-5-9.56v-29.69c0-3.67 2.25-5.37 5-3.78l27.23 15.72c2.75 1.6 5.01 5.9 5.01 9.57z";
const UP_CELL: &str = "l27.23-15.72c2.75-1.59 2.4-4.39-.78-6.23l-25.7-14.84c-3.18-1.84-8-2-10.79-.45l-27.23 15.72c-2.75 1.59-2.4 4.39.78 6.23l25.71 14.84c3.17 1.84 8.02 2.04 10.78.45z";
const RIGHT_CELL: &str = "v29.69c0 3.66 2.25 5.37 5 3.78l27.23-15.72c2.76-1.59 5-5.9 5-9.56v-29.73c0-3.67-2.25-5.37-5-3.78l-27.23 15.72c-2.77 1.6-5 5.89-5 9.6z";

/// Placement parameters of one projected facet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub base: Point,
    pub col_step: Point,
    pub row_step: Point,
    pub template: &'static str,
}

impl Projection {
    pub fn anchor(&self, col: usize, row: usize) -> Point {
        let (c, r) = (col as f64, row as f64);
        Point::new(
            self.base.x + c * self.col_step.x + r * self.row_step.x,
            self.base.y + c * self.col_step.y + r * self.row_step.y,
        )
    }
}

pub fn projection(facet: Facet, size: CubeSize) -> Option<Projection> {
    let x = f64::from(size.x);
    let z = f64::from(size.z);
    match facet {
        Facet::Front => Some(Projection {
            base: Point::new(41.2, 31.48 + RISE * z),
            col_step: Point::new(RUN, RISE),
            row_step: Point::new(0.0, EDGE),
            template: FRONT_CELL,
        }),
        Facet::Top => Some(Projection {
            base: Point::new(48.83, 17.92 + RISE * z),
            col_step: Point::new(RUN, -RISE),
            row_step: Point::new(42.47, RISE),
            template: UP_CELL,
        }),
        Facet::Right => Some(Projection {
            base: Point::new(4.09 + RUN * x, 7.98 + RISE * (z + x)),
            col_step: Point::new(RUN, -RISE),
            row_step: Point::new(0.0, EDGE),
            template: RIGHT_CELL,
        }),
        _ => None,
    }
}

pub fn canvas(size: CubeSize) -> (f64, f64) {
    let span = f64::from(size.z) + f64::from(size.x);
    (2.85 + RUN * span, -1.38 + RISE * span + EDGE * f64::from(size.y))
}

/// Rounded hexagon around the whole silhouette, including the hidden faces.
pub fn frame(size: CubeSize) -> PathData {
    let x = f64::from(size.x);
    let y = f64::from(size.y);
    let z = f64::from(size.z);

    let start = Point::new(2.85 + RUN * (x + z), -8.52 + EDGE * y + RISE * x);
    let vertical = 15.67 - EDGE * y;
    let along_x = Point::new(13.55 - RUN * x, 7.83 - RISE * x);
    let along_z = Point::new(13.58 - RUN * z, -7.83 + RISE * z);

    PathData::new()
        .move_to(start)
        .vertical(vertical)
        .raw("a15 15 0 00-7.49-13")
        .line(along_x.x, along_x.y)
        .raw("a14.94 14.94 0 00-15 0")
        .line(along_z.x, along_z.y)
        .raw("a15 15 0 00-7.49 13")
        .vertical(-vertical)
        .raw("a15 15 0 007.49 13")
        .line(-along_x.x, -along_x.y)
        .raw("a15 15 0 0015 0")
        .line(-along_z.x, -along_z.y)
        .raw("a15 15 0 007.49-13")
        .close()
}

pub fn build(spec: &CubeSpec) -> Result<Document, CubeError> {
    let kind = RenderKind::Isometric;
    let size = spec.size();
    let (width, height) = canvas(size);

    let mut doc = Document::new(width, height);
    doc.push(Element::Path {
        id: "base".to_string(),
        data: frame(size),
        fill: base_fill(spec)?,
    });

    for (facet, grid) in spec.sides() {
        let Some(proj) = projection(facet, size) else {
            continue;
        };
        let mut cells = Vec::with_capacity(grid.cols() * grid.rows());
        for (col, row, code) in grid.cells() {
            cells.push(Element::Path {
                id: cell_id(facet, kind, col, row),
                data: PathData::new().move_to(proj.anchor(col, row)).raw(proj.template),
                fill: color::resolve(code)?,
            });
        }
        doc.push(group(facet, kind, cells));
    }

    Ok(doc)
}

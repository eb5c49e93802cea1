//! Unfolded View - Six Facets Laid Out as a Cross
//!
//! ```text
//!          up
//!   left  front  right  back
//!         bottom
//! ```
//!
//! Every facet uses the flat view's full-size cells. Facet origins chain left
//! to right and top to bottom, and the background is one rounded outline of
//! the cross.

use crate::color;
use crate::error::CubeError;
use crate::facet::Facet;
use crate::spec::{CubeSize, CubeSpec};
use crate::svg::{Document, Element, PathData, Point};
use crate::views::flat::{CELL, CELL_RADIUS, PITCH};
use crate::views::{base_fill, cell_id, group, RenderKind};

/// Padding around a facet's cells, both sides together.
pub const FACET_PAD: f64 = 8.0;
/// Overlap between neighbouring facets. Keeps the gap between facets close
/// to the gap between cells.
pub const FACET_GAP: f64 = 7.0;
/// Corner radius of the background outline.
pub const OUTLINE_RADIUS: f64 = 7.42;

/// Side length of a facet `n` cells long, padding included.
pub fn facet_length(n: u32) -> f64 {
    FACET_PAD + f64::from(n) * PITCH
}

struct Lengths {
    x: f64,
    y: f64,
    z: f64,
}

impl Lengths {
    fn of(size: CubeSize) -> Self {
        Self {
            x: facet_length(size.x),
            y: facet_length(size.y),
            z: facet_length(size.z),
        }
    }
}

/// Top-left corner of a facet's box.
pub fn facet_origin(facet: Facet, size: CubeSize) -> Option<Point> {
    let l = Lengths::of(size);
    let column = l.z - FACET_GAP;
    let origin = match facet {
        Facet::Left => Point::new(0.0, column),
        Facet::Top => Point::new(column, 0.0),
        Facet::Front => Point::new(column, column),
        Facet::Bottom => Point::new(column, l.z + l.y - 2.0 * FACET_GAP),
        Facet::Right => Point::new(l.z + l.x - 2.0 * FACET_GAP, column),
        Facet::Back => Point::new(2.0 * l.z + l.x - 3.0 * FACET_GAP, column),
        Facet::Base => return None,
    };
    Some(origin)
}

pub fn canvas(size: CubeSize) -> (f64, f64) {
    let l = Lengths::of(size);
    (
        2.0 * l.z + 2.0 * l.x - 3.0 * FACET_GAP,
        2.0 * l.z + l.y - 2.0 * FACET_GAP,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    East,
    South,
    West,
    North,
}

impl Heading {
    fn unit(self) -> (f64, f64) {
        match self {
            Heading::East => (1.0, 0.0),
            Heading::South => (0.0, 1.0),
            Heading::West => (-1.0, 0.0),
            Heading::North => (0.0, -1.0),
        }
    }
}

/// Rounded outline of the cross, traced clockwise from the top-left corner of
/// the left arm. Each straight edge is followed by a quarter-round corner
/// turning onto the next edge's heading.
pub fn outline(size: CubeSize) -> PathData {
    use Heading::{East, North, South, West};

    let r = OUTLINE_RADIUS;
    let l = Lengths::of(size);
    let (x, y, z) = (
        l.x - 2.0 * r - FACET_GAP,
        l.y - 2.0 * r - FACET_GAP,
        l.z - 2.0 * r - FACET_GAP,
    );

    let edges = [
        (East, z),
        (North, z),
        (East, x + FACET_GAP),
        (South, z),
        (East, z + x + 2.0 * r),
        (South, y + FACET_GAP),
        (West, z + x + 2.0 * r),
        (South, z),
        (West, x + FACET_GAP),
        (North, z),
        (West, z),
        (North, y + FACET_GAP),
    ];

    let mut path = PathData::new().move_to(Point::new(r, l.z - FACET_GAP));
    for (i, &(heading, length)) in edges.iter().enumerate() {
        let (dx, dy) = heading.unit();
        path = match heading {
            East | West => path.horizontal(dx * length),
            North | South => path.vertical(dy * length),
        };
        let (nx, ny) = edges[(i + 1) % edges.len()].0.unit();
        path = path.smooth(
            Point::new(dx * r, dy * r),
            Point::new((dx + nx) * r, (dy + ny) * r),
        );
    }
    path.close()
}

pub fn build(spec: &CubeSpec) -> Result<Document, CubeError> {
    let kind = RenderKind::Unfolded;
    let size = spec.size();
    let (width, height) = canvas(size);

    let mut doc = Document::new(width, height);
    doc.push(Element::Path {
        id: "base".to_string(),
        data: outline(size),
        fill: base_fill(spec)?,
    });

    for (facet, grid) in spec.sides() {
        let Some(origin) = facet_origin(facet, size) else {
            continue;
        };
        let mut cells = Vec::with_capacity(grid.cols() * grid.rows());
        for (col, row, code) in grid.cells() {
            cells.push(Element::Rect {
                id: cell_id(facet, kind, col, row),
                origin: Point::new(
                    origin.x + FACET_GAP + col as f64 * PITCH,
                    origin.y + FACET_GAP + row as f64 * PITCH,
                ),
                width: CELL,
                height: CELL,
                radius: CELL_RADIUS,
                fill: color::resolve(code)?,
            });
        }
        doc.push(group(facet, kind, cells));
    }

    Ok(doc)
}

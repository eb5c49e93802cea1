//! SVG Document Model
//!
//! Views build a tree of typed primitives first and serialize it last, so a
//! failed color lookup can never leave half-written markup behind.

use std::fmt::Write;

use crate::color::Fill;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    let fixed = format!("{:.2}", value);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Builder for the `d` attribute of a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    data: String,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fixed path string.
    pub fn from_raw(raw: &str) -> Self {
        Self { data: raw.to_string() }
    }

    pub fn move_to(self, p: Point) -> Self {
        self.command('M', &[p.x, p.y])
    }

    pub fn line(self, dx: f64, dy: f64) -> Self {
        self.command('l', &[dx, dy])
    }

    pub fn horizontal(self, dx: f64) -> Self {
        self.command('h', &[dx])
    }

    pub fn vertical(self, dy: f64) -> Self {
        self.command('v', &[dy])
    }

    /// Relative smooth cubic: second control point, then end point.
    pub fn smooth(self, c: Point, end: Point) -> Self {
        self.command('s', &[c.x, c.y, end.x, end.y])
    }

    /// Append fixed drawing commands verbatim.
    pub fn raw(mut self, commands: &str) -> Self {
        if !self.data.is_empty() && !commands.starts_with(char::is_alphabetic) {
            self.data.push(' ');
        }
        self.data.push_str(commands);
        self
    }

    pub fn close(mut self) -> Self {
        self.data.push('z');
        self
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    fn command(mut self, letter: char, args: &[f64]) -> Self {
        self.data.push(letter);
        for (i, arg) in args.iter().enumerate() {
            if i > 0 {
                self.data.push(' ');
            }
            self.data.push_str(&fmt_num(*arg));
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect {
        id: String,
        origin: Point,
        width: f64,
        height: f64,
        radius: f64,
        fill: Fill,
    },
    Path {
        id: String,
        data: PathData,
        fill: Fill,
    },
    Group {
        id: String,
        children: Vec<Element>,
    },
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::Rect { id, .. } | Element::Path { id, .. } | Element::Group { id, .. } => id,
        }
    }

    fn write_to(&self, out: &mut String, depth: usize) {
        out.push_str("\r\n");
        for _ in 0..depth {
            out.push('\t');
        }
        match self {
            Element::Rect { id, origin, width, height, radius, fill } => {
                let _ = write!(
                    out,
                    r#"<rect id="{}" x="{}" y="{}" width="{}" height="{}" rx="{}" style="fill: {}"/>"#,
                    id,
                    fmt_num(origin.x),
                    fmt_num(origin.y),
                    fmt_num(*width),
                    fmt_num(*height),
                    fmt_num(*radius),
                    fill
                );
            }
            Element::Path { id, data, fill } => {
                let _ = write!(out, r#"<path id="{}" d="{}" style="fill: {}"/>"#, id, data.as_str(), fill);
            }
            Element::Group { id, children } => {
                let _ = write!(out, r#"<g id="{}">"#, id);
                for child in children {
                    child.write_to(out, depth + 1);
                }
                out.push_str("\r\n");
                for _ in 0..depth {
                    out.push('\t');
                }
                out.push_str("</g>");
            }
        }
    }
}

/// Root `<svg>` element with a `0 0 width height` view box.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: f64,
    pub height: f64,
    pub children: Vec<Element>,
}

impl Document {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height, children: Vec::new() }
    }

    pub fn push(&mut self, element: Element) {
        self.children.push(element);
    }

    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", fmt_num(self.width), fmt_num(self.height))
    }

    pub fn find(&self, id: &str) -> Option<&Element> {
        fn walk<'a>(elements: &'a [Element], id: &str) -> Option<&'a Element> {
            elements.iter().find_map(|e| {
                if e.id() == id {
                    return Some(e);
                }
                match e {
                    Element::Group { children, .. } => walk(children, id),
                    _ => None,
                }
            })
        }
        walk(&self.children, id)
    }

    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        let _ = write!(out, r#"<svg xmlns="{}" viewBox="{}">"#, SVG_NS, self.view_box());
        for child in &self.children {
            child.write_to(&mut out, 1);
        }
        out.push_str("\r\n</svg>");
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_num_trims() {
        assert_eq!(fmt_num(112.0), "112");
        assert_eq!(fmt_num(100.0), "100");
        assert_eq!(fmt_num(7.42), "7.42");
        assert_eq!(fmt_num(87.70), "87.7");
        assert_eq!(fmt_num(13.55 - 42.43), "-28.88");
        assert_eq!(fmt_num(-0.001), "0");
        assert_eq!(fmt_num(0.0), "0");
    }

    #[test]
    fn test_path_builder() {
        let d = PathData::new()
            .move_to(Point::new(1.5, 2.0))
            .vertical(-3.0)
            .raw("a15 15 0 00-7.49-13")
            .line(4.0, -5.25)
            .smooth(Point::new(7.42, 0.0), Point::new(7.42, -7.42))
            .close();
        assert_eq!(d.as_str(), "M1.5 2v-3a15 15 0 00-7.49-13l4 -5.25s7.42 0 7.42 -7.42z");
    }

    #[test]
    fn test_document_markup() {
        let mut doc = Document::new(10.0, 20.0);
        doc.push(Element::Group {
            id: "front".to_string(),
            children: vec![Element::Rect {
                id: "front-1x1".to_string(),
                origin: Point::new(1.0, 2.0),
                width: 3.0,
                height: 4.0,
                radius: 0.5,
                fill: Fill::Transparent,
            }],
        });
        assert_eq!(
            doc.to_markup(),
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 10 20\">\
             \r\n\t<g id=\"front\">\
             \r\n\t\t<rect id=\"front-1x1\" x=\"1\" y=\"2\" width=\"3\" height=\"4\" rx=\"0.5\" style=\"fill: transparent\"/>\
             \r\n\t</g>\
             \r\n</svg>"
        );
        assert!(doc.find("front-1x1").is_some());
        assert!(doc.find("back").is_none());
    }
}

//! Contract Invariant Tests
//!
//! These tests verify the non-negotiable guarantees.

use cube_svg::{
    color, render, render_kind,
    spec::CubeSpec,
    svg::{fmt_num, Element},
    views, CubeError, DimensionError, Fill, PipelineError, Puzzle, RenderKind,
};

const RED: Fill = Fill::Rgb(213, 0, 0);
const GREEN: Fill = Fill::Rgb(0, 153, 0);
const BLUE: Fill = Fill::Rgb(52, 52, 212);
const BLACK: Fill = Fill::Rgb(0, 0, 0);
const GRAY: Fill = Fill::Rgb(86, 86, 86);

fn fill_of(element: &Element) -> Fill {
    match element {
        Element::Rect { fill, .. } | Element::Path { fill, .. } => *fill,
        Element::Group { .. } => panic!("group has no fill"),
    }
}

/// Fills of every cell in a facet group, in document order.
fn facet_fills(kind: RenderKind, dims: &str, colors: &str, group: &str) -> Vec<Fill> {
    let spec = CubeSpec::parse(kind, dims, colors).unwrap();
    let doc = views::build(&spec).unwrap();
    match doc.find(group) {
        Some(Element::Group { children, .. }) => children.iter().map(fill_of).collect(),
        other => panic!("no group {group}: {other:?}"),
    }
}

fn base_fill(kind: RenderKind, dims: &str, colors: &str) -> Fill {
    let spec = CubeSpec::parse(kind, dims, colors).unwrap();
    let doc = views::build(&spec).unwrap();
    fill_of(doc.find("base").unwrap())
}

#[test]
fn invariant_single_code_fills_whole_facet() {
    for (kind, dims) in [
        (RenderKind::Flat, "4x3"),
        (RenderKind::Isometric, "3x4x5"),
        (RenderKind::Unfolded, "2x3x4"),
        (RenderKind::SkewbIsometric, "1"),
    ] {
        let fills = facet_fills(kind, dims, "b", "front");
        assert!(!fills.is_empty());
        assert!(fills.iter().all(|&f| f == BLUE), "{kind} front not uniform");
    }
}

#[test]
fn invariant_long_run_is_truncated() {
    let short = render(Puzzle::Cube, "flat", "2x1", "RG").unwrap();
    let long = render(Puzzle::Cube, "flat", "2x1", "RGBYWOQQQ").unwrap();
    assert_eq!(short.svg, long.svg);
}

#[test]
fn invariant_short_run_is_padded_gray() {
    let fills = facet_fills(RenderKind::Isometric, "2x2x2", "RG", "front");
    assert_eq!(fills, vec![RED, GREEN, GRAY, GRAY]);
}

#[test]
fn invariant_view_box_is_linear_in_size() {
    for n in 1..=8u32 {
        let dims = format!("{n}x{n}");
        let out = render(Puzzle::Cube, "flat", &dims, "R").unwrap();
        let side = 14 + 49 * n;
        let expected = format!(r#"viewBox="0 0 {side} {side}""#);
        assert!(out.svg.contains(&expected), "flat {dims}: {expected} missing");

        let dims = format!("{n}x{n}x{n}");
        let out = render(Puzzle::Cube, "unfolded", &dims, "R").unwrap();
        let length = 8 + 49 * n;
        let expected = format!(r#"viewBox="0 0 {} {}""#, 4 * length - 21, 3 * length - 14);
        assert!(out.svg.contains(&expected), "unfolded {dims}: {expected} missing");
    }

    for (x, y, z) in [(1u32, 1u32, 1u32), (2, 3, 4), (5, 1, 2), (64, 64, 64)] {
        let dims = format!("{x}x{y}x{z}");
        let out = render(Puzzle::Cube, "isometric", &dims, "R").unwrap();
        let span = f64::from(x + z);
        let expected = format!(
            r#"viewBox="0 0 {} {}""#,
            fmt_num(2.85 + 42.43 * span),
            fmt_num(-1.38 + 24.5 * span + 49.0 * f64::from(y))
        );
        assert!(out.svg.contains(&expected), "isometric {dims}: {expected} missing");
    }

    let out = render(Puzzle::Cube, "isometric", "2x3x4", "R").unwrap();
    assert!(out.svg.contains(r#"viewBox="0 0 257.43 292.62""#));

    let out = render(Puzzle::Skewb, "isometric", "1", "R").unwrap();
    assert!(out.svg.contains(r#"viewBox="0 0 172.57 194.62""#));
}

#[test]
fn invariant_structural_errors_reject_before_markup() {
    let cases = [
        ("flat", "3x3x3"),
        ("flat", "3"),
        ("flat", "0x3"),
        ("flat", "3x65"),
        ("flat", "-1x3"),
        ("flat", "ax3"),
        ("isometric", "3x3"),
        ("unfolded", "3x3x"),
    ];
    for (view, dims) in cases {
        match render(Puzzle::Cube, view, dims, "R") {
            Err(PipelineError::Render(CubeError::Structural(_))) => {}
            other => panic!("{view} {dims}: expected structural error, got {other:?}"),
        }
    }

    assert!(matches!(
        render(Puzzle::Skewb, "isometric", "2", "R"),
        Err(PipelineError::Render(CubeError::Structural(DimensionError::OutOfRange { value: 2, .. })))
    ));
}

#[test]
fn invariant_unknown_color_rejects_whole_request() {
    for kind in RenderKind::ALL {
        let dims = match kind.dimension_rule().arity {
            1 => "1",
            2 => "2x2",
            _ => "2x2x2",
        };
        // Every facet valid except the base.
        let mut entries = vec!["R"; kind.facet_slots().len() - 1];
        entries.push("Z");
        let err = render_kind(kind, dims, &entries.join("-")).unwrap_err();
        assert_eq!(err, CubeError::UnknownColor('Z'), "{kind}");
    }

    // Last cell of the front facet.
    let err = render(Puzzle::Cube, "flat", "2x2", "RRRQ").unwrap_err();
    assert_eq!(err.to_string(), "unknown color code 'Q'");

    // Last cell of the last side facet.
    let err = render(Puzzle::Cube, "unfolded", "1x1x1", "R-R-R-R-R-Q").unwrap_err();
    assert!(matches!(err, PipelineError::Render(CubeError::UnknownColor('Q'))));
}

#[test]
fn invariant_flat_end_to_end() {
    let out = render(Puzzle::Cube, "flat", "2x2", "R").unwrap();
    assert!(out.svg.contains(r#"viewBox="0 0 112 112""#));

    assert_eq!(facet_fills(RenderKind::Flat, "2x2", "R", "front"), vec![RED; 4]);
    for side in ["left", "top", "right", "bottom"] {
        assert_eq!(
            facet_fills(RenderKind::Flat, "2x2", "R", side),
            vec![Fill::Transparent; 2],
            "{side}"
        );
    }
    assert_eq!(base_fill(RenderKind::Flat, "2x2", "R"), BLACK);
}

#[test]
fn invariant_flat_entries_are_positional() {
    assert_eq!(facet_fills(RenderKind::Flat, "2x2", "R-G", "left"), vec![GREEN; 2]);
    assert_eq!(facet_fills(RenderKind::Flat, "2x2", "R-G", "top"), vec![Fill::Transparent; 2]);
    assert_eq!(base_fill(RenderKind::Flat, "2x2", "R-G-T-T-T-B"), BLUE);
}

#[test]
fn invariant_isometric_end_to_end() {
    let out = render(Puzzle::Cube, "isometric", "1x1x1", "K").unwrap();
    assert!(out.svg.contains(r#"viewBox="0 0 87.71 96.62""#));

    assert_eq!(facet_fills(RenderKind::Isometric, "1x1x1", "K", "front"), vec![BLACK]);
    assert_eq!(facet_fills(RenderKind::Isometric, "1x1x1", "K", "up"), vec![Fill::Transparent]);
    assert_eq!(facet_fills(RenderKind::Isometric, "1x1x1", "K", "right"), vec![Fill::Transparent]);
    assert_eq!(base_fill(RenderKind::Isometric, "1x1x1", "K"), BLACK);
}

#[test]
fn invariant_skewb_end_to_end() {
    let kind = RenderKind::SkewbIsometric;
    assert_eq!(facet_fills(kind, "1", "R-G-B-K", "front"), vec![RED; 5]);
    assert_eq!(facet_fills(kind, "1", "R-G-B-K", "up"), vec![GREEN; 5]);
    assert_eq!(facet_fills(kind, "1", "R-G-B-K", "right"), vec![BLUE; 5]);
    assert_eq!(base_fill(kind, "1", "R-G-B-K"), BLACK);

    let out = render(Puzzle::Skewb, "isometric", "1", "R-G-B-K").unwrap();
    assert!(out.svg.contains(r#"viewBox="0 0 172.57 194.62""#));
}

#[test]
fn invariant_render_deterministic() {
    for (puzzle, view, dims, colors) in [
        (Puzzle::Cube, "flat", "3x3", "RGBYWOXKT-R-G-B-Y"),
        (Puzzle::Cube, "isometric", "3x2x4", "W-R-G-O"),
        (Puzzle::Cube, "unfolded", "3x3x3", "R-G-B-Y-W-O-K"),
        (Puzzle::Skewb, "isometric", "1", "RGBYW-O-X"),
    ] {
        let a = render(puzzle, view, dims, colors).unwrap();
        let b = render(puzzle, view, dims, colors).unwrap();
        assert_eq!(a.svg, b.svg);
        assert_eq!(a.digest, b.digest);
    }
}

#[test]
fn invariant_lowercase_codes_match_uppercase() {
    let lower = render(Puzzle::Cube, "unfolded", "2x2x2", "rgby-w-o").unwrap();
    let upper = render(Puzzle::Cube, "unfolded", "2x2x2", "RGBY-W-O").unwrap();
    assert_eq!(lower.svg, upper.svg);
}

#[test]
fn invariant_unknown_view_rejected() {
    let err = render(Puzzle::Skewb, "unfolded", "1", "R").unwrap_err();
    assert_eq!(err.to_string(), "Unknown view parameter: unfolded");
}

#[test]
fn invariant_palette_is_fixed() {
    let codes: String = color::palette().iter().map(|e| e.code).collect();
    assert_eq!(codes, "RGBYWOXKT");
}

#[test]
fn invariant_saved_file_matches_markup() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cube.svg");

    let out = render(Puzzle::Cube, "isometric", "2x2x2", "R-G-B").unwrap();
    out.save(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, out.svg);
    assert!(written.ends_with("</svg>"));
}

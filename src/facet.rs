//! Facet Identifiers
//!
//! One enum for every visible region of the solid. Views differ only in the
//! name they print for a facet, never in which facet they mean.

use crate::views::RenderKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Facet {
    Front,
    Left,
    Top,
    Right,
    Bottom,
    Back,
    Base,
}

impl Facet {
    /// Display name used for group and cell ids in the given view.
    ///
    /// The flat view calls the upper facet "top"; every projected view
    /// calls it "up".
    pub fn name(self, kind: RenderKind) -> &'static str {
        match (self, kind) {
            (Facet::Front, _) => "front",
            (Facet::Left, _) => "left",
            (Facet::Top, RenderKind::Flat) => "top",
            (Facet::Top, _) => "up",
            (Facet::Right, _) => "right",
            (Facet::Bottom, _) => "bottom",
            (Facet::Back, _) => "back",
            (Facet::Base, _) => "base",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_is_named_per_view() {
        assert_eq!(Facet::Top.name(RenderKind::Flat), "top");
        assert_eq!(Facet::Top.name(RenderKind::Isometric), "up");
        assert_eq!(Facet::Top.name(RenderKind::Unfolded), "up");
        assert_eq!(Facet::Top.name(RenderKind::SkewbIsometric), "up");
    }

    #[test]
    fn test_names_unique_within_unfolded_view() {
        let all = [
            Facet::Front, Facet::Left, Facet::Top, Facet::Right,
            Facet::Bottom, Facet::Back, Facet::Base,
        ];
        let mut names: Vec<_> = all.iter().map(|f| f.name(RenderKind::Unfolded)).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}

mod segments_crossing;

pub use segments_crossing::SegmentsCrossing;

/// Orientation of the generated lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Lines parallel to the X axis, stacked along Y.
    Horizontal,
    /// Lines parallel to the Y axis, stacked along X.
    Vertical,
}

/// Where the first line of a distribution is anchored.
///
/// `Fwd`/`Back` are the -Y/+Y edges of the mask and pair with
/// [`Direction::Horizontal`]; `Left`/`Right` are the -X/+X edges and pair with
/// [`Direction::Vertical`]. `Center` works with both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Center,
    Fwd,
    Back,
    Left,
    Right,
}

impl Anchor {
    /// Returns `true` if this anchor is meaningful for `direction`.
    #[must_use]
    pub fn accepts(self, direction: Direction) -> bool {
        matches!(
            (direction, self),
            (_, Self::Center)
                | (Direction::Horizontal, Self::Fwd | Self::Back)
                | (Direction::Vertical, Self::Left | Self::Right)
        )
    }
}

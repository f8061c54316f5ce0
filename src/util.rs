use enum_map::Enum;
use ratatui::layout::{Flex, Layout, Rect, Size};

/// Return a `Rect` of the given size centered within `area`.
///
/// If `size` is larger than `area` in either dimension, the result is clipped
/// to `area` in that dimension.
pub(crate) fn center_rect(area: Rect, size: Size) -> Rect {
    let [area] = Layout::horizontal([size.width])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([size.height])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Navigation methods for field-less `Enum` types, used to move through menu
/// options
pub(crate) trait EnumExt: Enum {
    /// Returns the variant with the lowest discriminant
    fn min() -> Self {
        Self::from_usize(0)
    }

    /// Returns the variant with the highest discriminant
    fn max() -> Self {
        Self::from_usize(Self::LENGTH - 1)
    }

    /// Returns the variant after this one, if any
    fn next(self) -> Option<Self> {
        let i = self.into_usize().checked_add(1)?;
        (i < Self::LENGTH).then(|| Self::from_usize(i))
    }

    /// Returns the variant before this one, if any
    fn prev(self) -> Option<Self> {
        self.into_usize().checked_sub(1).map(Self::from_usize)
    }

    /// Iterate over all variants in discriminant order
    fn iter() -> impl Iterator<Item = Self> {
        (0..Self::LENGTH).map(Self::from_usize)
    }
}

impl<T: Enum> EnumExt for T {}

use crate::config::Options;
use ratatui::layout::{Position, Positions, Rect, Size};

/// Grid geometry for one session: the playable interior spans `1..=width`
/// horizontally and `1..=height` vertically, and row/column `0` and
/// `dimension + 1` are the border. Entering the border is fatal.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Board {
    pub(super) width: u16,
    pub(super) height: u16,
    /// Glyph the border is drawn with; display-only.
    pub(super) border: char,
}

impl Board {
    /// Tests whether `pos` lies in the playable interior.
    pub(super) fn contains(self, pos: Position) -> bool {
        (1..=self.width).contains(&pos.x) && (1..=self.height).contains(&pos.y)
    }

    /// The cell the snake's head starts on.
    pub(super) fn center(self) -> Position {
        Position::new(self.width / 2 + 1, self.height / 2 + 1)
    }

    /// Iterates over all interior cells.
    pub(super) fn interior(self) -> Positions {
        Rect::new(1, 1, self.width, self.height).positions()
    }

    /// Size of the board including its border cells.
    pub(super) fn framed_size(self) -> Size {
        Size::new(self.width.saturating_add(2), self.height.saturating_add(2))
    }
}

impl From<&Options> for Board {
    fn from(opts: &Options) -> Board {
        Board {
            width: opts.width,
            height: opts.height,
            border: opts.border,
        }
    }
}

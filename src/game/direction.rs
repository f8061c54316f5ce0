use ratatui::layout::Position;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Returns the position one cell away from `pos` in this direction, or
    /// `None` if that would leave the unsigned coordinate grid entirely
    /// (only possible past the top or left border row/column).
    pub(super) fn step(self, pos: Position) -> Option<Position> {
        let Position { mut x, mut y } = pos;
        match self {
            Direction::North => y = y.checked_sub(1)?,
            Direction::East => x = x.checked_add(1)?,
            Direction::South => y = y.checked_add(1)?,
            Direction::West => x = x.checked_sub(1)?,
        }
        Some(Position { x, y })
    }

    pub(super) fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }
}

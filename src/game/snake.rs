use super::direction::Direction;
use crate::consts;
use ratatui::layout::Position;
use std::collections::VecDeque;

/// The snake's body and facing.
///
/// All positions are board coordinates: the playable interior is
/// `1..=width` / `1..=height` and row/column `0` is the border.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    /// The positions of all of the snake's segments, head first.  Never
    /// empty.
    pub(super) body: VecDeque<Position>,

    /// The direction in which the snake is currently facing
    pub(super) direction: Direction,
}

impl Snake {
    /// Create a snake of `length` segments with its head at `head`, facing
    /// `direction`, with the body extending in a straight line away from the
    /// facing direction.
    pub(super) fn new(head: Position, length: u16, direction: Direction) -> Snake {
        let tailward = direction.reverse();
        let body = std::iter::successors(Some(head), |&p| tailward.step(p))
            .take(usize::from(length))
            .collect();
        Snake { body, direction }
    }

    /// Return the position of the snake's head
    pub(super) fn head(&self) -> Position {
        self.body
            .front()
            .copied()
            .expect("snake body should never be empty")
    }

    /// Return the glyph to use for drawing the snake's head
    pub(super) fn head_symbol(&self) -> char {
        match self.direction {
            Direction::North => consts::SNAKE_HEAD_NORTH_SYMBOL,
            Direction::South => consts::SNAKE_HEAD_SOUTH_SYMBOL,
            Direction::East => consts::SNAKE_HEAD_EAST_SYMBOL,
            Direction::West => consts::SNAKE_HEAD_WEST_SYMBOL,
        }
    }

    /// Return the positions of all of the snake's segments, head first
    pub(super) fn segments(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Return the number of segments in the snake's body
    pub(super) fn length(&self) -> usize {
        self.body.len()
    }

    /// Change the snake's facing to `direction`.  A request to reverse
    /// straight into the neck segment is silently ignored; perpendicular and
    /// same-direction requests are honored.
    pub(super) fn turn(&mut self, direction: Direction) {
        if direction != self.direction.reverse() {
            self.direction = direction;
        }
    }

    /// Return the cell the head would move into on the next advance, or
    /// `None` if that cell lies off the coordinate grid past the top or left
    /// border.
    pub(super) fn peek_next_head(&self) -> Option<Position> {
        self.direction.step(self.head())
    }

    /// Move the snake forwards one cell in the current direction: a new head
    /// segment appears at [`Snake::peek_next_head()`], and unless `grow` is
    /// true the tail segment is removed.  Does nothing if the next head
    /// position is off the coordinate grid; the caller is expected to have
    /// already ruled on boundary collisions.
    pub(super) fn advance(&mut self, grow: bool) {
        let Some(next) = self.peek_next_head() else {
            return;
        };
        self.body.push_front(next);
        if !grow {
            let _ = self.body.pop_back();
        }
    }

    /// Test whether any segment — optionally ignoring the head — sits on
    /// `pos`.  The head is ignored when checking the head itself against the
    /// rest of the body, and included when choosing food placements.
    pub(super) fn occupies(&self, pos: Position, include_head: bool) -> bool {
        let mut segments = self.body.iter();
        if !include_head {
            let _ = segments.next();
        }
        segments.any(|&p| p == pos)
    }
}

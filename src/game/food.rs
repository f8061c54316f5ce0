use super::board::Board;
use super::snake::Snake;
use crate::consts;
use log::debug;
use rand::{seq::IteratorRandom, Rng};
use ratatui::layout::Position;
use thiserror::Error;

/// The single active food item
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    /// The cell the food currently sits on
    pub(super) position: Position,

    /// How much eating this food is worth
    pub(super) value: u32,
}

impl Food {
    /// Place a food item on a uniformly-random free interior cell of `board`.
    ///
    /// Up to [`PLACEMENT_ATTEMPTS`][consts::PLACEMENT_ATTEMPTS] cells are
    /// sampled at random and rejected while the snake occupies them; after
    /// that, the choice is made uniformly among the remaining free cells, so
    /// placement stays cheap on an empty board without looping forever on a
    /// crowded one.
    ///
    /// # Errors
    ///
    /// Returns [`PlacementError`] if the snake occupies every interior cell.
    pub(super) fn place<R: Rng>(
        board: Board,
        snake: &Snake,
        rng: &mut R,
    ) -> Result<Food, PlacementError> {
        for _ in 0..consts::PLACEMENT_ATTEMPTS {
            let pos = Position::new(
                rng.random_range(1..=board.width),
                rng.random_range(1..=board.height),
            );
            if !snake.occupies(pos, true) {
                debug!("placed food at ({}, {})", pos.x, pos.y);
                return Ok(Food::at(pos));
            }
        }
        let pos = board
            .interior()
            .filter(|&p| !snake.occupies(p, true))
            .choose(rng)
            .ok_or(PlacementError)?;
        debug!("placed food at ({}, {}) after exhausting samples", pos.x, pos.y);
        Ok(Food::at(pos))
    }

    fn at(position: Position) -> Food {
        Food {
            position,
            value: consts::FOOD_VALUE,
        }
    }

    /// Test whether the food sits on `pos`
    pub(super) fn is_at(&self, pos: Position) -> bool {
        self.position == pos
    }

    /// Return the cell the food currently sits on
    pub(super) fn position(&self) -> Position {
        self.position
    }

    /// Return the score increment for eating this food
    pub(super) fn value(&self) -> u32 {
        self.value
    }
}

/// Returned by [`Food::place()`] when the board has no free cell left
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[error("no free cell left to place food on")]
pub(crate) struct PlacementError;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::direction::Direction;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    fn board(width: u16, height: u16) -> Board {
        Board {
            width,
            height,
            border: '#',
        }
    }

    /// A snake covering every interior cell of a 5×5 board except `free`
    fn nearly_full_snake(free: Position) -> Snake {
        let mut snake = Snake::new(Position::new(1, 1), 1, Direction::North);
        snake.body = board(5, 5)
            .interior()
            .filter(|&p| p != free)
            .collect();
        snake
    }

    #[test]
    fn placement_avoids_the_snake() {
        let board = board(10, 10);
        let snake = Snake::new(Position::new(6, 6), 5, Direction::North);
        for seed in 0..32 {
            let mut rng = ChaCha12Rng::seed_from_u64(seed);
            let food = Food::place(board, &snake, &mut rng).unwrap();
            assert!(board.contains(food.position()), "seed {seed}");
            assert!(!snake.occupies(food.position(), true), "seed {seed}");
            assert_eq!(food.value(), 1);
        }
    }

    #[test]
    fn placement_finds_the_last_free_cell() {
        let free = Position::new(5, 5);
        let snake = nearly_full_snake(free);
        let mut rng = ChaCha12Rng::seed_from_u64(0xF00D);
        let food = Food::place(board(5, 5), &snake, &mut rng).unwrap();
        assert_eq!(food.position(), free);
    }

    #[test]
    fn placement_fails_on_a_full_board() {
        let mut snake = nearly_full_snake(Position::new(5, 5));
        snake.body.push_front(Position::new(5, 5));
        let mut rng = ChaCha12Rng::seed_from_u64(0xF00D);
        assert_eq!(
            Food::place(board(5, 5), &snake, &mut rng),
            Err(PlacementError)
        );
    }

    #[test]
    fn is_at() {
        let food = Food::at(Position::new(3, 4));
        assert!(food.is_at(Position::new(3, 4)));
        assert!(!food.is_at(Position::new(4, 3)));
    }
}

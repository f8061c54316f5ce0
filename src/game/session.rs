use super::board::Board;
use super::direction::Direction;
use super::food::{Food, PlacementError};
use super::snake::Snake;
use crate::config::{Options, OptionsError};
use log::{debug, info};
use rand::Rng;
use ratatui::layout::Position;
use std::fmt;
use thiserror::Error;

/// One complete play-through of the game: the board, the snake, the food,
/// and the score, advanced one tick at a time until a terminal collision.
///
/// The driver owns the session and calls [`Session::tick()`] once per tick;
/// nothing here blocks, sleeps, or reads input.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Session<R = rand::rngs::ThreadRng> {
    pub(super) rng: R,
    pub(super) board: Board,
    pub(super) snake: Snake,
    pub(super) food: Food,
    pub(super) score: u32,
    pub(super) state: SessionState,
}

impl Session<rand::rngs::ThreadRng> {
    pub(super) fn new(options: &Options) -> Result<Session, NewSessionError> {
        Session::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    /// Start a session per `options`: the snake is laid out from the board's
    /// center pointing north, and the first food item is placed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the options fail validation.  (Food placement cannot
    /// fail here: a validated snake never covers the whole board.)
    pub(super) fn new_with_rng(options: &Options, mut rng: R) -> Result<Session<R>, NewSessionError> {
        options.validate()?;
        let board = Board::from(options);
        let snake = Snake::new(board.center(), options.start_length, Direction::North);
        let food = Food::place(board, &snake, &mut rng)?;
        info!(
            "new session: {}×{} board, snake length {}",
            options.width, options.height, options.start_length,
        );
        Ok(Session {
            rng,
            board,
            snake,
            food,
            score: 0,
            state: SessionState::Running,
        })
    }

    /// Advance the session by one tick, first applying `turn` (if any) to
    /// the snake's facing.  Calling this on an ended session changes nothing
    /// and returns the same final outcome.
    pub(super) fn tick(&mut self, turn: Option<Direction>) -> TickOutcome {
        if let SessionState::Over(_) = self.state {
            return TickOutcome::Ended(self.score);
        }
        if let Some(direction) = turn {
            self.snake.turn(direction);
        }
        let next_head = self
            .snake
            .peek_next_head()
            .filter(|&p| self.board.contains(p));
        let Some(next_head) = next_head else {
            // The snake is left untouched on a boundary collision: the head
            // never entered the border cell.
            return self.end(EndCause::Wall);
        };
        let ate = self.food.is_at(next_head);
        self.snake.advance(ate);
        if ate {
            self.score += self.food.value();
            debug!("ate food at ({}, {}); score {}", next_head.x, next_head.y, self.score);
            match Food::place(self.board, &self.snake, &mut self.rng) {
                Ok(food) => self.food = food,
                Err(PlacementError) => return self.end(EndCause::BoardFull),
            }
        }
        // Self-collision is judged against the body *after* the shift, so
        // the cell the tail just vacated is fair to move into.
        if self.snake.occupies(next_head, false) {
            return self.end(EndCause::SelfCollision);
        }
        TickOutcome::Continued
    }

    fn end(&mut self, cause: EndCause) -> TickOutcome {
        info!("session over ({cause}); final score {}", self.score);
        self.state = SessionState::Over(cause);
        TickOutcome::Ended(self.score)
    }
}

impl<R> Session<R> {
    pub(super) fn score(&self) -> u32 {
        self.score
    }

    pub(super) fn running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub(super) fn board(&self) -> Board {
        self.board
    }

    pub(super) fn snake(&self) -> &Snake {
        &self.snake
    }

    pub(super) fn food_position(&self) -> Position {
        self.food.position()
    }

    /// Why the session ended, or `None` while it is still running
    pub(super) fn end_cause(&self) -> Option<EndCause> {
        match self.state {
            SessionState::Running => None,
            SessionState::Over(cause) => Some(cause),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum SessionState {
    Running,
    Over(EndCause),
}

/// What ended a session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum EndCause {
    /// The snake's head entered a border cell
    Wall,

    /// The snake's head landed on its own body
    SelfCollision,

    /// The snake filled the board and no cell was left for food
    BoardFull,
}

impl fmt::Display for EndCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndCause::Wall => write!(f, "wall collision"),
            EndCause::SelfCollision => write!(f, "self collision"),
            EndCause::BoardFull => write!(f, "board full"),
        }
    }
}

/// The driver-facing result of one tick
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum TickOutcome {
    /// The session is still running
    Continued,

    /// The session has ended with the given final score
    Ended(u32),
}

#[derive(Debug, Error)]
pub(crate) enum NewSessionError {
    #[error("invalid options")]
    Options(#[from] OptionsError),
    #[error("could not place food")]
    Placement(#[from] PlacementError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;
    use std::collections::VecDeque;

    const RNG_SEED: u64 = 0x0123456789ABCDEF;

    fn options(width: u16, height: u16, start_length: u16) -> Options {
        Options {
            width,
            height,
            start_length,
            ..Options::default()
        }
    }

    fn session(options: &Options) -> Session<ChaCha12Rng> {
        Session::new_with_rng(options, ChaCha12Rng::seed_from_u64(RNG_SEED)).unwrap()
    }

    #[test]
    fn new_session() {
        let session = session(&options(10, 10, 3));
        assert_eq!(session.score(), 0);
        assert!(session.running());
        assert_eq!(session.snake().head(), Position::new(6, 6));
        assert_eq!(session.snake().length(), 3);
        assert!(session.board().contains(session.food_position()));
        assert!(!session.snake().occupies(session.food_position(), true));
    }

    #[test]
    fn new_session_rejects_invalid_options() {
        let r = Session::new_with_rng(
            &options(4, 10, 3),
            ChaCha12Rng::seed_from_u64(RNG_SEED),
        );
        assert!(matches!(r, Err(NewSessionError::Options(_))));
    }

    #[test]
    fn plain_tick_moves_the_snake() {
        let mut session = session(&options(10, 10, 3));
        session.food.position = Position::new(1, 1);
        assert_eq!(session.tick(None), TickOutcome::Continued);
        assert_eq!(session.snake().head(), Position::new(6, 5));
        assert_eq!(session.snake().length(), 3);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn eating_food_grows_the_snake_and_scores() {
        let mut session = session(&options(10, 10, 3));
        session.food.position = Position::new(6, 5);
        assert_eq!(session.tick(None), TickOutcome::Continued);
        assert_eq!(session.snake().head(), Position::new(6, 5));
        assert_eq!(session.snake().length(), 4);
        assert_eq!(session.score(), 1);
        // The food was relocated off the snake
        assert_ne!(session.food_position(), Position::new(6, 5));
        assert!(session.board().contains(session.food_position()));
        assert!(!session.snake().occupies(session.food_position(), true));
    }

    #[test]
    fn reversal_request_is_ignored() {
        let mut session = session(&options(10, 10, 5));
        session.food.position = Position::new(1, 1);
        // Facing North; a South request must leave the facing unchanged
        assert_eq!(session.tick(Some(Direction::South)), TickOutcome::Continued);
        assert_eq!(session.snake().head(), Position::new(6, 5));
    }

    #[test]
    fn perpendicular_turn_is_applied() {
        let mut session = session(&options(10, 10, 3));
        session.food.position = Position::new(1, 1);
        assert_eq!(session.tick(Some(Direction::West)), TickOutcome::Continued);
        assert_eq!(session.snake().head(), Position::new(5, 6));
    }

    #[test]
    fn wall_collision_ends_the_session_without_mutation() {
        let mut session = session(&options(10, 10, 3));
        session.snake = Snake::new(Position::new(1, 5), 3, Direction::West);
        session.food.position = Position::new(9, 9);
        let before = session.snake.clone();
        assert_eq!(session.tick(None), TickOutcome::Ended(0));
        assert_eq!(session.snake, before);
        assert_eq!(session.end_cause(), Some(EndCause::Wall));
    }

    /// A hook-shaped snake whose head at (2, 2) is boxed in by its own body
    /// to the east and by the vacating tail to the north
    fn hooked_snake() -> Snake {
        let mut snake = Snake::new(Position::new(2, 2), 1, Direction::North);
        snake.body = VecDeque::from([
            Position::new(2, 2),
            Position::new(2, 3),
            Position::new(3, 3),
            Position::new(3, 2),
            Position::new(3, 1),
            Position::new(2, 1),
        ]);
        snake
    }

    #[test]
    fn self_collision_ends_the_session_after_the_shift() {
        let mut session = session(&options(10, 10, 3));
        session.snake = hooked_snake();
        session.snake.direction = Direction::East;
        session.food.position = Position::new(9, 9);
        assert_eq!(session.tick(None), TickOutcome::Ended(0));
        assert_eq!(session.end_cause(), Some(EndCause::SelfCollision));
        // The shift was applied: the head rests on the collided cell, which
        // did not move away
        assert_eq!(session.snake().head(), Position::new(3, 2));
        assert_eq!(session.snake().length(), 6);
        assert!(session.snake().occupies(Position::new(3, 2), false));
    }

    #[test]
    fn moving_into_the_vacating_tail_cell_is_not_a_collision() {
        let mut session = session(&options(10, 10, 3));
        session.snake = hooked_snake();
        // Facing North, the next head is (2, 1) — exactly where the tail is,
        // but the tail moves away in the same tick
        session.food.position = Position::new(9, 9);
        assert_eq!(session.tick(None), TickOutcome::Continued);
        assert_eq!(session.snake().head(), Position::new(2, 1));
        assert_eq!(session.snake().length(), 6);
    }

    #[test]
    fn filling_the_board_wins() {
        let mut session = session(&options(5, 5, 3));
        // A snake covering every interior cell except (5, 5), head at
        // (4, 5) facing the food on the last free cell
        let serpentine = [
            Position::new(4, 5),
            Position::new(3, 5),
            Position::new(2, 5),
            Position::new(1, 5),
            Position::new(1, 4),
            Position::new(2, 4),
            Position::new(3, 4),
            Position::new(4, 4),
            Position::new(5, 4),
            Position::new(5, 3),
            Position::new(4, 3),
            Position::new(3, 3),
            Position::new(2, 3),
            Position::new(1, 3),
            Position::new(1, 2),
            Position::new(2, 2),
            Position::new(3, 2),
            Position::new(4, 2),
            Position::new(5, 2),
            Position::new(5, 1),
            Position::new(4, 1),
            Position::new(3, 1),
            Position::new(2, 1),
            Position::new(1, 1),
        ];
        session.snake.body = VecDeque::from(serpentine);
        session.snake.direction = Direction::East;
        session.food.position = Position::new(5, 5);
        assert_eq!(session.tick(None), TickOutcome::Ended(1));
        assert_eq!(session.end_cause(), Some(EndCause::BoardFull));
        assert_eq!(session.snake().length(), 25);
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn tick_on_an_ended_session_is_a_no_op() {
        let mut session = session(&options(10, 10, 3));
        session.snake = Snake::new(Position::new(1, 5), 3, Direction::West);
        session.food.position = Position::new(9, 9);
        assert_eq!(session.tick(None), TickOutcome::Ended(0));
        let frozen = session.clone();
        assert_eq!(session.tick(Some(Direction::North)), TickOutcome::Ended(0));
        assert_eq!(session.tick(None), TickOutcome::Ended(0));
        assert_eq!(session, frozen);
    }

    #[test]
    fn score_tracks_length_gained() {
        let mut session = session(&options(10, 10, 3));
        let start_length = session.snake().length();
        for _ in 0..50 {
            if !session.running() {
                break;
            }
            // Steer is irrelevant; force-feed by moving the food into the
            // snake's path every tick
            session.food.position = session
                .snake
                .peek_next_head()
                .filter(|&p| session.board.contains(p))
                .unwrap_or(Position::new(9, 9));
            let _ = session.tick(None);
        }
        let gained = session.snake().length() - start_length;
        assert_eq!(session.score(), u32::try_from(gained).unwrap());
    }
}

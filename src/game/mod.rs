mod board;
mod direction;
mod food;
mod paused;
mod session;
mod snake;
use self::direction::Direction;
use self::paused::{PauseOpt, Paused};
use self::session::{EndCause, Session};
pub(crate) use self::session::NewSessionError;
use crate::app::Screen;
use crate::command::Command;
use crate::config::Options;
use crate::consts;
use crate::util::center_rect;
use crossterm::event::{poll, read, Event};
use log::debug;
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Clear, Widget},
    Frame,
};
use std::io;
use std::time::{Duration, Instant};

/// The game screen: a [`Session`] plus the presentation-side state driving
/// it — tick pacing, the one-slot direction-request buffer, and the pause
/// popup.
#[derive(Clone, Debug)]
pub(crate) struct GameScreen<R = rand::rngs::ThreadRng> {
    session: Session<R>,
    options: Options,
    /// The most recent steering request since the last tick; a newer request
    /// replaces an older one, and exactly one is applied per tick.
    pending_turn: Option<Direction>,
    paused: Option<Paused>,
    next_tick: Option<Instant>,
}

impl GameScreen<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options) -> Result<Self, NewSessionError> {
        let session = Session::new(&options)?;
        Ok(GameScreen {
            session,
            options,
            pending_turn: None,
            paused: None,
            next_tick: None,
        })
    }
}

impl<R: Rng> GameScreen<R> {
    #[cfg(test)]
    fn new_with_rng(options: Options, rng: R) -> Result<GameScreen<R>, NewSessionError> {
        let session = Session::new_with_rng(&options, rng)?;
        Ok(GameScreen {
            session,
            options,
            pending_turn: None,
            paused: None,
            next_tick: None,
        })
    }

    /// Wait for input until the next tick deadline.  If a key event arrives
    /// first, handle it; otherwise advance the session by one tick.  While
    /// paused or after the session has ended there is no deadline and reads
    /// block.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.paused.is_none() && self.session.running() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.tick_interval());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                let _ = self.session.tick(self.pending_turn.take());
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// Time between ticks: the configured interval, shortened for every food
    /// item eaten but never below the configured minimum
    fn tick_interval(&self) -> Duration {
        self.options
            .interval
            .saturating_sub(consts::SPEEDUP_PER_FOOD.saturating_mul(self.session.score()))
            .max(self.options.min_interval)
    }
}

impl<R> GameScreen<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        if let Some(ref mut paused) = self.paused {
            match paused.handle_event(event)? {
                PauseOpt::Resume => self.resume(),
                PauseOpt::Restart => return Some(self.restart()),
                PauseOpt::Quit => return Some(Screen::Quit(self.session.score())),
            }
        } else if self.session.running() {
            if event == Event::FocusLost {
                self.pause();
            } else {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::Quit | Command::Q => {
                        return Some(Screen::Quit(self.session.score()))
                    }
                    Command::Up => self.request_turn(Direction::North),
                    Command::Left => self.request_turn(Direction::West),
                    Command::Down => self.request_turn(Direction::South),
                    Command::Right => self.request_turn(Direction::East),
                    Command::Esc | Command::P => self.pause(),
                    Command::R => return Some(self.restart()),
                    _ => (),
                }
            }
        } else {
            match Command::from_key_event(event.as_key_press_event()?)? {
                Command::R => return Some(self.restart()),
                Command::Quit | Command::Q => {
                    return Some(Screen::Quit(self.session.score()))
                }
                _ => (),
            }
        }
        None
    }

    fn request_turn(&mut self, direction: Direction) {
        debug!("turn requested: {direction:?}");
        self.pending_turn = Some(direction);
    }

    fn pause(&mut self) {
        self.paused = Some(Paused::new());
    }

    fn resume(&mut self) {
        self.paused = None;
        // Stale deadline; restart the pacing from now
        self.next_tick = None;
    }

    fn restart(&self) -> Screen {
        let game = GameScreen::new(self.options)
            .expect("restarting with already-validated options should not fail");
        Screen::Game(game)
    }
}

impl<R> Widget for &GameScreen<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let [score_area, board_area, msg1_area, msg2_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(area);
        Line::styled(
            format!(" Score: {}", self.session.score()),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board = self.session.board();
        let block_area = center_rect(board_area, board.framed_size());
        GlyphBorder {
            glyph: board.border,
        }
        .render(block_area, buf);

        let snake = self.session.snake();
        let mut canvas = Canvas {
            area: block_area,
            buf,
        };
        for &pos in snake.segments().iter().skip(1) {
            canvas.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        canvas.draw_cell(
            self.session.food_position(),
            consts::FOOD_SYMBOL,
            consts::FOOD_STYLE,
        );
        // Draw the head last so that, on a fatal collision, it overwrites
        // whatever it collided with
        match self.session.end_cause() {
            Some(EndCause::Wall | EndCause::SelfCollision) => {
                canvas.draw_cell(snake.head(), consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            }
            _ => canvas.draw_cell(snake.head(), snake.head_symbol(), consts::SNAKE_STYLE),
        }

        if let Some(cause) = self.session.end_cause() {
            let headline = if cause == EndCause::BoardFull {
                " — YOU WIN —"
            } else {
                " — GAME OVER —"
            };
            Span::from(headline).render(msg1_area, buf);
            Line::from_iter([
                Span::raw(" Choose One: Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ])
            .render(msg2_area, buf);
        }

        if let Some(paused) = self.paused {
            let pause_area = center_rect(
                area,
                Size {
                    width: Paused::WIDTH,
                    height: Paused::HEIGHT,
                },
            );
            Clear.render(pause_area, buf);
            paused.render(pause_area, buf);
        }
    }
}

/// Draws cells addressed in board coordinates into the sub-area of the
/// buffer holding the board
#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_char(&mut self, pos: Position, symbol: char) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
        }
    }

    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

/// The border around the board, every cell drawn with the same glyph
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GlyphBorder {
    glyph: char,
}

impl Widget for GlyphBorder {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let size = area.as_size();
        let max_x = size.width.saturating_sub(1);
        let max_y = size.height.saturating_sub(1);
        let mut canvas = Canvas { area, buf };
        for x in 0..=max_x {
            canvas.draw_char(Position::new(x, 0), self.glyph);
            canvas.draw_char(Position::new(x, max_y), self.glyph);
        }
        for y in 1..max_y {
            canvas.draw_char(Position::new(0, y), self.glyph);
            canvas.draw_char(Position::new(max_x, y), self.glyph);
        }
    }
}

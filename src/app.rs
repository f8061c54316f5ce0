use crate::config::Options;
use crate::game::{GameScreen, NewSessionError};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The application: a loop alternating between drawing the current screen
/// and feeding it input until it asks to quit
#[derive(Clone, Debug)]
pub(crate) struct App {
    screen: Screen,
}

impl App {
    pub(crate) fn new(options: Options) -> Result<App, NewSessionError> {
        let screen = Screen::Game(GameScreen::new(options)?);
        Ok(App { screen })
    }

    /// Run the application.  Returns the final score of the last session
    /// played.
    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<u32> {
        loop {
            match self.screen {
                Screen::Game(ref game) => {
                    terminal.draw(|frame| game.draw(frame))?;
                }
                Screen::Quit(score) => return Ok(score),
            }
            if let Screen::Game(ref mut game) = self.screen {
                if let Some(screen) = game.process_input()? {
                    self.screen = screen;
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum Screen {
    Game(GameScreen),
    Quit(u32),
}

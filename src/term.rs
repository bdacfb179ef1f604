//! Terminal implementations of the game's input and display seams
use crate::command::{latest_key, Key};
use crate::config::Glyphs;
use crate::game::{GameState, InputSource, Renderer};
use crate::view::{GameOverBanner, GameView};
use crossterm::event::{poll, read};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Duration;

/// Keypresses read from the terminal via crossterm
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct CrosstermInput;

impl InputSource for CrosstermInput {
    fn poll(&mut self) -> io::Result<Option<Key>> {
        let mut keys = Vec::new();
        while poll(Duration::ZERO)? {
            if let Some(key) = Key::from_event(&read()?) {
                keys.push(key);
            }
        }
        Ok(latest_key(keys))
    }

    fn wait(&mut self) -> io::Result<Key> {
        loop {
            if let Some(key) = Key::from_event(&read()?) {
                return Ok(key);
            }
        }
    }
}

/// Draws the game on a ratatui terminal
#[derive(Debug)]
pub(crate) struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    glyphs: Glyphs,
    /// The most recently drawn state, kept so that the game-over banner can
    /// be shown on top of the final frame
    last: Option<GameState>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub(crate) fn new(terminal: Terminal<B>, glyphs: Glyphs) -> Self {
        TerminalRenderer {
            terminal,
            glyphs,
            last: None,
        }
    }

    #[cfg(test)]
    fn backend(&self) -> &B {
        self.terminal.backend()
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn draw(&mut self, state: &GameState) -> io::Result<()> {
        let view = GameView::new(state, self.glyphs);
        self.terminal
            .draw(|frame| frame.render_widget(view, frame.area()))?;
        self.last = Some(state.clone());
        Ok(())
    }

    fn draw_game_over(&mut self, length: usize, food_eaten: u32) -> io::Result<()> {
        let glyphs = self.glyphs;
        let last = self.last.as_ref();
        self.terminal.draw(|frame| {
            let area = frame.area();
            if let Some(state) = last {
                frame.render_widget(GameView::new(state, glyphs), area);
            }
            frame.render_widget(GameOverBanner { length, food_eaten }, area);
        })?;
        Ok(())
    }
}

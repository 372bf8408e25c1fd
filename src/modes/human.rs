use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use super::ticker::Ticker;
use crate::game::{GameConfig, Session, StepOutcome};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::storage::KeyValueStore;

/// Interactive play in the terminal
pub struct HumanMode<S> {
    session: Session<S>,
    renderer: Renderer,
    input_handler: InputHandler,
    ticker: Ticker,
    should_quit: bool,
}

impl<S: KeyValueStore> HumanMode<S> {
    pub fn new(config: GameConfig, store: S) -> Self {
        let session = Session::new(config, store);
        info!("loaded high score {}", session.highscore());

        Self {
            session,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            ticker: Ticker::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        let result = self.run_game_loop(&mut terminal).await;

        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Render at 30 FPS, independent of game speed
        let mut render_timer = interval(Duration::from_millis(33));

        self.ticker.arm(self.session.tick_interval());

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => return Err(err).context("Failed to read terminal event"),
                        None => self.should_quit = true,
                    }
                }

                _ = self.ticker.fired() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    let interval = self.session.tick_interval();
                    terminal.draw(|frame| {
                        self.renderer.render(
                            frame,
                            self.session.state(),
                            self.session.highscore(),
                            interval,
                        );
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                info!("quitting");
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };

        // Releases and auto-repeats would double up turns
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.handle_key_event(key) {
            KeyAction::Steer(direction) => {
                if !self.session.steer(direction) {
                    debug!("rejected reversal to {:?}", direction);
                }
            }
            KeyAction::Restart => self.restart_game(),
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    /// Step once, then re-arm the clock for the new score or stop it
    fn update_game(&mut self) {
        match self.session.tick() {
            StepOutcome::Collided(_) | StepOutcome::Halted => self.ticker.disarm(),
            StepOutcome::AteFood => {
                let next = self.session.tick_interval();
                debug!(
                    "score {}, next tick in {}ms",
                    self.session.state().score,
                    next.as_millis()
                );
                self.ticker.arm(next);
            }
            StepOutcome::Moved => self.ticker.arm(self.session.tick_interval()),
        }
    }

    /// Restart is only offered on the game-over screen
    fn restart_game(&mut self) {
        if !self.session.is_over() {
            return;
        }
        self.session.restart();
        self.ticker.arm(self.session.tick_interval());
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

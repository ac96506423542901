use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{GameConfig, GameEngine, GameStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Owns the engine and the terminal. The engine never schedules itself;
/// this loop drives it on a fixed cadence and tears the timers down with
/// the loop when the user quits.
pub struct App {
    config: GameConfig,
    engine: GameEngine,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl App {
    pub fn new(config: GameConfig) -> Self {
        let engine = GameEngine::new(config.clone());

        Self {
            config,
            engine,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
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

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.config.tick_interval_ms);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Simulation tick; the engine no-ops unless playing
                _ = tick_timer.tick() => {
                    self.advance_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    if self.engine.state().status == GameStatus::Playing {
                        self.metrics.update();
                    }
                    terminal.draw(|frame| {
                        self.renderer.render(frame, self.engine.state(), &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                self.engine.set_direction(direction);
            }
            KeyAction::Start => {
                // The engine rejects a start mid-game; gate the metrics
                // reset the same way so a stray Enter cannot zero the score.
                if self.engine.state().status != GameStatus::Playing {
                    self.engine.start();
                    self.metrics.on_game_start();
                }
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn advance_game(&mut self) {
        let outcome = self.engine.tick();

        if outcome.ate_food {
            self.metrics.on_food_eaten();
        }
        if outcome.collision.is_some() {
            self.metrics.on_game_over();
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    #[test]
    fn test_app_starts_idle() {
        let app = App::new(GameConfig::default());
        assert_eq!(app.engine.state().status, GameStatus::NotStarted);
        assert_eq!(app.metrics.score, 0);
    }

    #[test]
    fn test_start_action_begins_game() {
        let mut app = App::new(GameConfig::default());
        app.apply_action(KeyAction::Start);
        assert_eq!(app.engine.state().status, GameStatus::Playing);
    }

    #[test]
    fn test_start_while_playing_keeps_score() {
        let mut app = App::new(GameConfig::default());
        app.apply_action(KeyAction::Start);
        app.metrics.score = 7;

        app.apply_action(KeyAction::Start);

        assert_eq!(app.metrics.score, 7);
        assert_eq!(app.engine.state().status, GameStatus::Playing);
    }

    #[test]
    fn test_steer_applies_on_next_tick() {
        let mut app = App::new(GameConfig::default());
        app.apply_action(KeyAction::Start);
        app.apply_action(KeyAction::Steer(Direction::Down));

        app.advance_game();

        assert_eq!(app.engine.state().direction, Direction::Down);
    }

    #[test]
    fn test_tick_before_start_changes_nothing() {
        let mut app = App::new(GameConfig::default());
        app.advance_game();

        assert_eq!(app.engine.state().status, GameStatus::NotStarted);
        assert_eq!(app.metrics.score, 0);
    }

    #[test]
    fn test_quit_action() {
        let mut app = App::new(GameConfig::default());
        app.apply_action(KeyAction::Quit);
        assert!(app.should_quit);
    }
}

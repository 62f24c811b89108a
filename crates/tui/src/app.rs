use std::{
    io, thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use picpuzzle_core::{AppConfig, Game, Step};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tokio::{
    sync::mpsc::{self, error::TryRecvError},
    time::{self, MissedTickBehavior},
};
use tracing::{error, info};

use crate::{
    canvas::{TerminalCanvas, Viewport},
    input,
};

const INPUT_POLL: Duration = Duration::from_millis(50);

type Backend = CrosstermBackend<io::Stdout>;

/// Terminal frontend driving a [`Game`] at a fixed frame rate.
pub struct PuzzleApp {
    config: AppConfig,
    game: Game,
}

impl PuzzleApp {
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let game = Game::new(&config, now);
        Self { config, game }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut stdout = io::stdout();
        enable_raw_mode().context("failed to enter raw mode")?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("failed to create terminal")?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        let result = self.frame_loop(&mut terminal).await;
        if let Err(err) = &result {
            error!(?err, "Frame loop failed");
        }

        restore_terminal(&mut terminal)?;
        result
    }

    async fn frame_loop(&mut self, terminal: &mut Terminal<Backend>) -> Result<()> {
        let (event_tx, mut event_rx) = mpsc::channel::<Event>(128);
        spawn_input_thread(event_tx);

        let mut ticker = time::interval(frame_interval(self.config.frame_rate));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        info!(frame_rate = self.config.frame_rate, "Entering frame loop");

        loop {
            let area = terminal.size()?;
            let viewport = Viewport::new(area.width, area.height, self.config.surface.size());

            let mut events = Vec::new();
            loop {
                match event_rx.try_recv() {
                    Ok(raw) => events.extend(input::translate(raw, &viewport)),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => bail!("input thread stopped"),
                }
            }

            if self.game.handle_events(&events) == Step::Exit {
                break;
            }
            self.game.update(Instant::now());
            terminal.draw(|frame| self.draw(frame))?;

            ticker.tick().await;
        }

        info!("Frame loop finished");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let area = frame.size();
        let viewport = Viewport::new(area.width, area.height, self.config.surface.size());
        let mut canvas = TerminalCanvas::new(viewport, self.config.surface.background);
        self.game.draw(&mut canvas);
        frame.render_widget(&canvas, area);
    }
}

fn frame_interval(frame_rate: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(frame_rate.max(1)))
}

fn restore_terminal(terminal: &mut Terminal<Backend>) -> Result<()> {
    disable_raw_mode().context("failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("failed to leave alternate screen")?;
    terminal.show_cursor()?;
    Ok(())
}

fn spawn_input_thread(sender: mpsc::Sender<Event>) {
    thread::spawn(move || loop {
        if sender.is_closed() {
            break;
        }
        match event::poll(INPUT_POLL) {
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if sender.blocking_send(evt).is_err() {
                        break;
                    }
                }
                Err(err) => {
                    error!(%err, "Failed to read terminal event");
                    break;
                }
            },
            Ok(false) => {}
            Err(err) => {
                error!(%err, "Failed to poll terminal events");
                break;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_interval_matches_rate() {
        assert_eq!(frame_interval(50), Duration::from_millis(20));
        assert_eq!(frame_interval(0), Duration::from_secs(1));
    }
}

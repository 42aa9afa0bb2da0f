//! Brick Breaker entry point
//!
//! Runs the game in the terminal: crossterm for input, the canvas renderer
//! for output, and a fixed-timestep driver for the session.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use brick_breaker::platform::{MonotonicClock, map_key};
use brick_breaker::renderer::{TerminalRenderer, render_frame};
use brick_breaker::sim::{Control, Session};
use brick_breaker::{Game, GameConfig, Settings};

/// Environment variable naming a JSON config file
const CONFIG_ENV: &str = "BRICK_BREAKER_CONFIG";

fn main() -> Result<()> {
    env_logger::init();

    let config = load_config()?;
    log::info!("Brick Breaker starting...");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn load_config() -> Result<GameConfig> {
    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var(CONFIG_ENV).ok());
    match path {
        Some(path) => GameConfig::load(path),
        None => Ok(GameConfig::default()),
    }
}

fn run(term: &mut TerminalRenderer, config: GameConfig) -> Result<()> {
    let session = Session::new(config, Settings::default());
    let mut game = Game::new(session, MonotonicClock::new());

    loop {
        let (w, h) = term.size();
        term.draw(render_frame(&game.frame(), w, h))?;

        // Input with timeout until next step.
        let timeout = Duration::from_millis(game.ms_until_next_step());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    let session = game.session();
                    if let Some(command) = map_key(key, session.phase, session.settings) {
                        if game.handle(command) == Control::Quit {
                            log::info!("Exiting");
                            return Ok(());
                        }
                    }
                }
            }
        }

        game.update();
    }
}

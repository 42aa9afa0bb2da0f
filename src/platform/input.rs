//! Keyboard mapping for the terminal host

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::settings::Settings;
use crate::sim::{Command, GamePhase};

/// Front-page keys that cycle one setting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontPageKey {
    BallSpeed,
    PaddleSize,
    BrickColor,
}

impl FrontPageKey {
    fn from_code(code: KeyCode) -> Option<Self> {
        match code {
            KeyCode::Char('1') => Some(FrontPageKey::BallSpeed),
            KeyCode::Char('2') => Some(FrontPageKey::PaddleSize),
            KeyCode::Char('3') => Some(FrontPageKey::BrickColor),
            _ => None,
        }
    }

    /// Settings with this key's option advanced by one
    pub fn cycle(&self, settings: Settings) -> Settings {
        let mut next = settings;
        match self {
            FrontPageKey::BallSpeed => next.ball_speed = settings.ball_speed.next(),
            FrontPageKey::PaddleSize => next.paddle_size = settings.paddle_size.next(),
            FrontPageKey::BrickColor => next.brick_color = settings.brick_color.next(),
        }
        next
    }
}

/// Map a key press to a session command
pub fn map_key(key: KeyEvent, phase: GamePhase, settings: Settings) -> Option<Command> {
    if should_quit(key) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Command::MoveRight),

        // Flow
        KeyCode::Enter | KeyCode::Char(' ') if phase == GamePhase::Intro => Some(Command::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Resume),
        KeyCode::Esc => Some(Command::ResetToIntro),

        // Settings, front page only
        code if phase == GamePhase::Intro => FrontPageKey::from_code(code)
            .map(|k| Command::ApplySettings(k.cycle(settings))),

        _ => None,
    }
}

/// Check if key should quit the game
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

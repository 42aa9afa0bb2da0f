//! Render description handed to the host
//!
//! A frame is a plain snapshot: the host draws it and throws it away.

use serde::Serialize;

use super::rect::Rect;
use super::state::{GamePhase, Session};
use crate::settings::{BrickColor, Settings};

/// Message overlay the host should show on top of the play field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Overlay {
    FrontPage,
    None,
    Paused,
    Countdown(u8),
    LifeLost { lives: u8 },
    GameOver { won: bool, score: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BallView {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrickView {
    pub rect: Rect,
    pub color: BrickColor,
}

/// Everything the host needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub width: f32,
    pub height: f32,
    pub paddle: Rect,
    pub ball: BallView,
    /// Live bricks only
    pub bricks: Vec<BrickView>,
    pub score: u32,
    /// `None` when lives are disabled
    pub lives: Option<u8>,
    pub settings: Settings,
    pub overlay: Overlay,
}

impl Session {
    /// Overlay for the current phase
    pub fn overlay(&self) -> Overlay {
        match self.phase {
            GamePhase::Intro => Overlay::FrontPage,
            GamePhase::Playing => Overlay::None,
            GamePhase::Paused => Overlay::Paused,
            GamePhase::Countdown { remaining } => Overlay::Countdown(remaining),
            GamePhase::RoundLost => Overlay::LifeLost { lives: self.lives },
            GamePhase::Won => Overlay::GameOver {
                won: true,
                score: self.score,
            },
            GamePhase::Lost => Overlay::GameOver {
                won: false,
                score: self.score,
            },
        }
    }

    /// Snapshot the drawable state
    pub fn frame(&self) -> Frame {
        Frame {
            width: self.config.window_width,
            height: self.config.window_height,
            paddle: self.paddle.rect(),
            ball: BallView {
                x: self.ball.pos.x,
                y: self.ball.pos.y,
                radius: self.ball.radius,
            },
            bricks: self
                .bricks
                .iter()
                .filter(|b| b.alive)
                .map(|b| BrickView {
                    rect: b.rect,
                    color: b.color,
                })
                .collect(),
            score: self.score,
            lives: self.config.lives_enabled.then_some(self.lives),
            settings: self.settings,
            overlay: self.overlay(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::Command;

    #[test]
    fn test_front_page_frame() {
        let session = Session::with_defaults();
        let frame = session.frame();
        assert_eq!(frame.overlay, Overlay::FrontPage);
        assert_eq!(frame.bricks.len(), 50);
        assert_eq!(frame.lives, Some(3));
        assert_eq!(frame.paddle, Rect::new(250.0, 370.0, 100.0, 15.0));
        assert_eq!(frame.ball.radius, 8.0);
    }

    #[test]
    fn test_frame_hides_dead_bricks() {
        let mut session = Session::with_defaults();
        session.handle(Command::Start);
        session.bricks[4].alive = false;
        assert_eq!(session.frame().bricks.len(), 49);
        assert_eq!(session.frame().overlay, Overlay::None);
    }

    #[test]
    fn test_overlay_per_phase() {
        let mut session = Session::with_defaults();
        session.handle(Command::Start);
        session.handle(Command::Pause);
        assert_eq!(session.overlay(), Overlay::Paused);
        session.handle(Command::Resume);
        assert_eq!(session.overlay(), Overlay::Countdown(3));

        session.phase = GamePhase::Lost;
        session.score = 12;
        assert_eq!(
            session.overlay(),
            Overlay::GameOver {
                won: false,
                score: 12
            }
        );
    }

    #[test]
    fn test_lives_hidden_when_disabled() {
        let config = GameConfig {
            lives_enabled: false,
            ..GameConfig::default()
        };
        let session = Session::new(config, Default::default());
        assert_eq!(session.frame().lives, None);
    }

    #[test]
    fn test_frame_serializes() {
        let json = serde_json::to_string(&Session::with_defaults().frame()).unwrap();
        assert!(json.contains("\"overlay\":\"FrontPage\""));
        assert!(json.contains("\"score\":0"));
    }
}

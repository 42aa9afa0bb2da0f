//! Property tests over random play sequences

use glam::Vec2;
use proptest::prelude::*;

use brick_breaker::sim::{
    Command, GamePhase, Paddle, Session, TickOutcome, clamp_speed, paddle_bounce, tick,
};
use brick_breaker::{BallSpeed, BrickColor, GameConfig, PaddleSize, Settings};

#[derive(Debug, Clone)]
enum Action {
    Left,
    Right,
    Pause,
    Resume,
    Tick,
    Wait(u64),
    Settings(usize, usize, usize),
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        3 => Just(Action::Left),
        3 => Just(Action::Right),
        1 => Just(Action::Pause),
        1 => Just(Action::Resume),
        20 => Just(Action::Tick),
        2 => (0u64..2500).prop_map(Action::Wait),
        1 => (0usize..4, 0usize..4, 0usize..4).prop_map(|(a, b, c)| Action::Settings(a, b, c)),
    ]
}

fn start_state() -> impl Strategy<Value = (f32, f32, f32, f32)> {
    (
        20.0f32..580.0,
        170.0f32..340.0,
        prop_oneof![-6.0f32..-1.0, 1.0f32..6.0],
        prop_oneof![-6.0f32..-1.0, 1.0f32..6.0],
    )
}

proptest! {
    #[test]
    fn session_invariants_hold(
        (x, y, dx, dy) in start_state(),
        actions in prop::collection::vec(action(), 1..400),
    ) {
        let mut session = Session::with_defaults();
        session.handle(Command::Start);
        session.ball.pos = Vec2::new(x, y);
        session.ball.vel = Vec2::new(dx, dy);

        for action in actions {
            let lives_before = session.lives;
            let live_before = session.live_brick_count();

            let outcome = match action {
                Action::Left => { session.handle(Command::MoveLeft); None }
                Action::Right => { session.handle(Command::MoveRight); None }
                Action::Pause => { session.handle(Command::Pause); None }
                Action::Resume => { session.handle(Command::Resume); None }
                Action::Wait(ms) => { session.advance_time(ms); None }
                Action::Settings(a, b, c) => {
                    let settings = Settings::new(
                        BallSpeed::from_index(a),
                        PaddleSize::from_index(b),
                        BrickColor::from_index(c),
                    );
                    session.handle(Command::ApplySettings(settings));
                    None
                }
                Action::Tick => Some(tick(&mut session)),
            };

            // Paddle never leaves the window
            let width = session.config.window_width;
            prop_assert!(session.paddle.x >= 0.0);
            prop_assert!(session.paddle.x + session.paddle.width <= width + 1e-3);

            // Score tracks destroyed bricks within the current grid
            prop_assert_eq!(
                (session.score - session.round_start_score) as usize,
                session.bricks_destroyed()
            );

            // Lives only go down, one at a time
            prop_assert!(session.lives <= lives_before);
            prop_assert!(lives_before - session.lives <= 1);

            match outcome {
                Some(TickOutcome::PaddleHit) => {
                    prop_assert!(session.ball.speed() <= session.max_speed() + 1e-3);
                    prop_assert!(session.ball.vel.y < 0.0);
                    prop_assert_eq!(session.live_brick_count(), live_before);
                }
                Some(TickOutcome::BrickHit(_)) | Some(TickOutcome::Won) => {
                    prop_assert_eq!(session.live_brick_count() + 1, live_before);
                }
                Some(TickOutcome::RoundLost) => {
                    prop_assert_eq!(session.lives + 1, lives_before);
                    prop_assert!(session.lives > 0);
                    prop_assert_eq!(session.phase, GamePhase::RoundLost);
                }
                Some(TickOutcome::Lost) => {
                    prop_assert_eq!(session.lives, 0);
                    prop_assert_eq!(session.phase, GamePhase::Lost);
                }
                Some(TickOutcome::Moved) | Some(TickOutcome::Idle) => {
                    prop_assert!(session.live_brick_count() <= live_before);
                }
                None => {}
            }

            if session.phase.is_game_over() {
                break;
            }
        }
    }

    #[test]
    fn paddle_bounce_never_exceeds_cap(
        dx in -20.0f32..20.0,
        dy in 0.1f32..20.0,
        offset in -1.0f32..=1.0,
        width in prop_oneof![Just(60.0f32), Just(100.0f32), Just(140.0f32)],
        multiplier in prop_oneof![Just(0.5f32), Just(1.0f32), Just(1.5f32)],
    ) {
        let paddle = Paddle { x: 200.0, y: 370.0, width, height: 15.0 };
        let center_x = paddle.center_x() + offset * width / 2.0;
        let max_speed = 2.0 * 4.0 * multiplier;

        let vel = paddle_bounce(Vec2::new(dx, dy), center_x, &paddle, max_speed);
        prop_assert!(vel.length() <= max_speed + 1e-3);
        prop_assert!(vel.y < 0.0);
    }

    #[test]
    fn clamp_preserves_direction(dx in -50.0f32..50.0, dy in -50.0f32..50.0) {
        let vel = Vec2::new(dx, dy);
        let clamped = clamp_speed(vel, 8.0);
        prop_assert!(clamped.length() <= 8.0 + 1e-3);
        if vel.length() > 1e-3 {
            let cross = vel.x * clamped.y - vel.y * clamped.x;
            prop_assert!(cross.abs() < 1e-2 * vel.length());
            prop_assert!(vel.dot(clamped) >= 0.0);
        }
    }

    #[test]
    fn apply_settings_is_idempotent(
        a in 0usize..5,
        b in 0usize..5,
        c in 0usize..5,
        ticks in 0usize..50,
    ) {
        let settings = Settings::new(
            BallSpeed::from_index(a),
            PaddleSize::from_index(b),
            BrickColor::from_index(c),
        );
        let mut base = Session::new(GameConfig::default(), Settings::default());
        base.handle(Command::Start);
        for _ in 0..ticks {
            tick(&mut base);
        }

        let mut once = base.clone();
        once.apply_settings(settings);
        let mut twice = base;
        twice.apply_settings(settings);
        twice.apply_settings(settings);

        prop_assert_eq!(once.paddle.width, twice.paddle.width);
        prop_assert_eq!(once.paddle.x, twice.paddle.x);
        prop_assert_eq!(once.ball.vel, twice.ball.vel);
        prop_assert_eq!(once.ball.speed(), twice.ball.speed());
        prop_assert_eq!(once.settings, twice.settings);
        prop_assert_eq!(once.live_brick_count(), twice.live_brick_count());
    }
}

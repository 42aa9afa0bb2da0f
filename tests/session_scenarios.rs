//! End-to-end session scenarios driven through the public API

use glam::Vec2;

use brick_breaker::sim::{Command, GamePhase, Session, TickOutcome, TimedEvent, tick};
use brick_breaker::{BallSpeed, BrickColor, GameConfig, PaddleSize, Settings};

fn started(config: GameConfig) -> Session {
    let mut session = Session::new(config, Settings::default());
    session.handle(Command::Start);
    session
}

/// Put the ball just above the floor, away from the paddle, heading down
fn drop_ball(session: &mut Session) {
    session.ball.pos = Vec2::new(60.0, session.config.window_height - 10.0);
    session.ball.vel = Vec2::new(0.0, 4.0);
}

#[test]
fn test_paddle_deflection_scenario() {
    let config = GameConfig {
        paddle_y: 385.0,
        ..GameConfig::default()
    };
    let mut session = started(config);
    assert_eq!(session.paddle.rect().left, 250.0);
    assert_eq!(session.paddle.rect().right, 350.0);
    assert_eq!(session.paddle.rect().bottom, 400.0);

    // Drifting left while falling onto the paddle
    session.ball.pos = Vec2::new(300.0, 200.0);
    session.ball.vel = Vec2::new(-1.0, 4.0);

    let mut ticks = 0;
    loop {
        let before = session.ball.vel;
        let outcome = tick(&mut session);
        ticks += 1;
        assert!(ticks < 100, "ball never reached the paddle");
        if outcome == TickOutcome::PaddleHit {
            let center_x = session.ball.pos.x;
            assert!((250.0..=350.0).contains(&center_x));
            assert!(session.ball.rect().bottom >= 385.0);
            assert_eq!(session.ball.vel.y, -before.y);
            let expected_dx = before.x + (center_x - 300.0) / 50.0;
            assert!((session.ball.vel.x - expected_dx).abs() < 1e-5);
            break;
        }
        assert_eq!(outcome, TickOutcome::Moved);
    }
    assert_eq!(ticks, 45);
}

#[test]
fn test_single_contact_tick_deflection() {
    let config = GameConfig {
        paddle_y: 385.0,
        ..GameConfig::default()
    };
    let mut session = started(config);
    session.ball.pos = Vec2::new(316.0, 375.0);
    session.ball.vel = Vec2::new(4.0, 4.0);

    assert_eq!(tick(&mut session), TickOutcome::PaddleHit);
    assert!((session.ball.vel.x - 4.4).abs() < 1e-5);
    assert_eq!(session.ball.vel.y, -4.0);
    assert_eq!(session.stored_vel, session.ball.vel);
}

#[test]
fn test_clearing_every_brick_wins_without_losing_lives() {
    let mut session = started(GameConfig::default());
    assert_eq!(session.bricks.len(), 50);
    assert_eq!(session.lives, 3);

    for index in 0..session.bricks.len() {
        let rect = session.bricks[index].rect;
        // Just under the brick, moving up into it
        session.ball.pos = Vec2::new(rect.center_x().min(590.0), rect.bottom + 10.0);
        session.ball.vel = Vec2::new(0.0, -4.0);

        let live_before = session.live_brick_count();
        let outcome = tick(&mut session);

        if index + 1 < 50 {
            assert_eq!(outcome, TickOutcome::BrickHit(index));
            assert_eq!(session.live_brick_count(), live_before - 1);
        } else {
            assert_eq!(outcome, TickOutcome::Won);
        }
        assert_eq!(
            session.score as usize,
            session.initial_brick_count() - session.live_brick_count()
        );
    }

    assert_eq!(session.phase, GamePhase::Won);
    assert_eq!(session.lives, 3);
    assert_eq!(session.score, 50);
}

#[test]
fn test_three_floor_contacts_end_the_game() {
    let mut session = started(GameConfig::default());

    for expected_lives in [2u8, 1] {
        drop_ball(&mut session);
        assert_eq!(tick(&mut session), TickOutcome::RoundLost);
        assert_eq!(session.phase, GamePhase::RoundLost);
        assert_eq!(session.lives, expected_lives);

        // Ball stays put during the message
        let pos = session.ball.pos;
        assert_eq!(tick(&mut session), TickOutcome::Idle);
        assert_eq!(session.ball.pos, pos);

        assert_eq!(
            session.advance_time(2000),
            vec![TimedEvent::ResumeAfterLifeLost]
        );
        assert_eq!(session.phase, GamePhase::Playing);
    }

    drop_ball(&mut session);
    assert_eq!(tick(&mut session), TickOutcome::Lost);
    assert_eq!(session.phase, GamePhase::Lost);
    assert_eq!(session.lives, 0);
    assert_eq!(session.pending_event(), None);

    // Nothing brings the ball back except a restart
    assert!(session.advance_time(10_000).is_empty());
    assert_eq!(tick(&mut session), TickOutcome::Idle);

    session.handle(Command::ResetToIntro);
    assert_eq!(session.phase, GamePhase::Intro);
    session.handle(Command::Start);
    assert_eq!(session.lives, 3);
    assert_eq!(session.score, 0);
    assert_eq!(session.live_brick_count(), 50);
}

#[test]
fn test_without_lives_first_floor_contact_is_game_over() {
    let config = GameConfig {
        lives_enabled: false,
        ..GameConfig::default()
    };
    let mut session = started(config);
    drop_ball(&mut session);
    assert_eq!(tick(&mut session), TickOutcome::Lost);
    assert_eq!(session.phase, GamePhase::Lost);
}

#[test]
fn test_life_loss_restores_deflected_velocity() {
    let mut session = started(GameConfig::default());
    // Bounce once to produce a deflected stored velocity
    session.ball.pos = Vec2::new(340.0, 364.0);
    session.ball.vel = Vec2::new(4.0, 4.0);
    assert_eq!(tick(&mut session), TickOutcome::PaddleHit);
    let deflected = session.stored_vel;
    assert_ne!(deflected, session.start_velocity());

    drop_ball(&mut session);
    tick(&mut session);
    session.advance_time(2000);
    assert_eq!(session.ball.vel, deflected);

    // A fresh game goes back to the configured speed
    session.handle(Command::ResetToIntro);
    session.handle(Command::Start);
    assert_eq!(session.ball.vel, Vec2::new(4.0, -4.0));
}

#[test]
fn test_pause_resume_round_trip() {
    let mut session = started(GameConfig::default());
    tick(&mut session);
    let vel = session.ball.vel;
    let pos = session.ball.pos;

    session.handle(Command::Pause);
    assert_eq!(tick(&mut session), TickOutcome::Idle);
    assert_eq!(session.ball.pos, pos);

    session.handle(Command::Resume);
    for remaining in [3u8, 2, 1] {
        assert_eq!(session.phase, GamePhase::Countdown { remaining });
        assert_eq!(tick(&mut session), TickOutcome::Idle);
        session.advance_time(1000);
    }
    assert_eq!(session.phase, GamePhase::Playing);
    assert_eq!(session.ball.vel, vel);
    assert_eq!(tick(&mut session), TickOutcome::Moved);
    assert_eq!(session.ball.pos, pos + vel);
}

#[test]
fn test_settings_from_front_page_carry_into_play() {
    let mut session = Session::new(GameConfig::default(), Settings::default());
    let settings = Settings::from_labels("fast", "small", "green");
    assert_eq!(
        settings,
        Settings::new(BallSpeed::Fast, PaddleSize::Small, BrickColor::Green)
    );
    session.handle(Command::ApplySettings(settings));
    session.handle(Command::ApplySettings(settings));
    session.handle(Command::Start);

    assert_eq!(session.paddle.width, 60.0);
    assert_eq!(session.paddle.x, 270.0);
    assert_eq!(session.ball.vel, Vec2::new(6.0, -6.0));
    assert_eq!(session.max_speed(), 12.0);
    assert!(session.frame().bricks.iter().all(|b| b.color == BrickColor::Green));
}

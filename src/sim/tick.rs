//! Fixed timestep simulation tick
//!
//! One call advances the ball by one step and resolves collisions in a fixed
//! order: walls, floor, paddle, bricks. Collision handling is deliberately
//! simple; keep the ordering and the first-match brick policy intact.

use glam::Vec2;

use super::collision::{
    first_brick_hit, hits_floor, paddle_bounce, paddle_contact, reflect_off_walls,
};
use super::state::{GamePhase, Session};
use super::timers::TimedEvent;

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing moved
    Idle,
    /// Ball moved without touching the paddle or a brick
    Moved,
    /// Ball bounced off the paddle
    PaddleHit,
    /// Ball destroyed the brick at this index
    BrickHit(usize),
    /// Ball reached the floor and lives remain
    RoundLost,
    /// Ball reached the floor with no lives left
    Lost,
    /// Last brick destroyed
    Won,
}

/// Advance the session by one fixed timestep
pub fn tick(session: &mut Session) -> TickOutcome {
    if session.phase != GamePhase::Playing {
        return TickOutcome::Idle;
    }
    session.time_ticks += 1;

    // 1. Integrate
    session.ball.integrate();

    // 2. Walls and ceiling
    let walls = reflect_off_walls(&mut session.ball, session.config.window_width);
    if walls.any() {
        log::trace!("Wall bounce {:?}, velocity {}", walls, session.ball.vel);
    }

    // 3. Floor ends the round; nothing else is checked this tick
    if hits_floor(&session.ball, session.config.window_height) {
        return lose_life(session);
    }

    // 4. Paddle
    let mut outcome = TickOutcome::Moved;
    if paddle_contact(&session.ball, &session.paddle) {
        let vel = paddle_bounce(
            session.ball.vel,
            session.ball.pos.x,
            &session.paddle,
            session.max_speed(),
        );
        session.ball.vel = vel;
        session.stored_vel = vel;
        outcome = TickOutcome::PaddleHit;
    }

    // 5. Bricks: first live overlap in row-major order, at most one per tick
    if let Some(index) = first_brick_hit(&session.ball.rect(), &session.bricks) {
        let brick = &mut session.bricks[index];
        brick.alive = false;
        session.score += 1;
        session.ball.vel.y = -session.ball.vel.y;
        log::debug!(
            "Brick ({}, {}) destroyed, score {}",
            brick.row,
            brick.col,
            session.score
        );
        outcome = TickOutcome::BrickHit(index);
    }

    if session.live_brick_count() == 0 {
        session.phase = GamePhase::Won;
        session.ball.vel = Vec2::ZERO;
        log::info!(
            "All bricks cleared: score {}, lives {}",
            session.score,
            session.lives
        );
        return TickOutcome::Won;
    }

    outcome
}

fn lose_life(session: &mut Session) -> TickOutcome {
    session.lives = session.lives.saturating_sub(1);
    session.ball.vel = Vec2::ZERO;

    if session.lives == 0 {
        session.phase = GamePhase::Lost;
        log::info!("Game over: score {}", session.score);
        return TickOutcome::Lost;
    }

    if session.config.refill_bricks_on_life_loss {
        session.rebuild_bricks();
    }
    session.reset_positions();
    session.phase = GamePhase::RoundLost;
    session
        .timers
        .schedule(TimedEvent::ResumeAfterLifeLost, session.config.life_lost_delay_ms);
    log::info!("Life lost, {} remaining", session.lives);
    TickOutcome::RoundLost
}

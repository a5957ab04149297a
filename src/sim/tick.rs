//! Per-frame simulation step
//!
//! One `tick` per display refresh, in the same fixed order every frame:
//! trail spawn, particle aging, paddle kinematics, wall reflection, paddle
//! check, brick scan, win check, position integration. Collisions are
//! evaluated against the pre-integration position plus pending velocity; the
//! ball only moves at the very end of the frame.
//!
//! The countdown runs on its own one-second cadence through [`second_tick`],
//! dispatched by the driver from wall-clock time.

use rand::Rng;

use super::collision::{self, PaddleOutcome};
use super::particles;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;

/// Input state sampled by the host for one frame. The core reads it; the host
/// owns its lifecycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub left_held: bool,
    pub right_held: bool,
    /// Absolute pointer positioning (mouse/touch). Applied after the key
    /// model, so within a frame the pointer wins.
    pub pointer_x: Option<f32>,
}

/// Advance the simulation by one frame
pub fn tick(state: &mut GameState, input: &FrameInput) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.frame_count += 1;

    // Trail follows the pre-integration ball position
    particles::spawn_trail(
        &mut state.trail_particles,
        state.ball.pos,
        state.ball.radius,
        &mut state.rng,
    );
    particles::step_pools(&mut state.particles, &mut state.trail_particles);

    state
        .paddle
        .step(input.left_held, input.right_held, state.canvas.width);
    if let Some(pointer_x) = input.pointer_x {
        state.paddle.set_center(pointer_x, state.canvas.width);
    }

    if collision::wall_reflect_x(&mut state.ball, state.canvas.width) {
        particles::spawn_impact(
            &mut state.trail_particles,
            state.ball.pos,
            state.ball.radius,
            &mut state.rng,
        );
    }
    if collision::wall_reflect_top(&mut state.ball) {
        particles::spawn_impact(
            &mut state.trail_particles,
            state.ball.pos,
            state.ball.radius,
            &mut state.rng,
        );
    }

    match collision::check_paddle(&state.ball, &state.paddle, state.canvas.height) {
        PaddleOutcome::Bounce => {
            let hit = collision::hit_point(state.ball.pos.x, &state.paddle);
            state.ball.vel = collision::paddle_bounce_velocity(state.ball.base_speed, hit);
            state.set_combo(1);
        }
        PaddleOutcome::Missed => {
            if lose_life(state) {
                return;
            }
        }
        PaddleOutcome::None => {}
    }

    resolve_brick_hit(state);

    if state.bricks.all_destroyed() {
        state.phase = GamePhase::Won;
        state.events.push(GameEvent::GameWon);
        log::info!(
            "run won: score {} with {} lives and {}s left",
            state.score,
            state.lives,
            state.timer_secs
        );
        return;
    }

    state.ball.pos += state.ball.vel;
}

/// Decrement the countdown by one second. Called on a real-time cadence,
/// independent of the frame rate; a timer bonus can push it back up.
pub fn second_tick(state: &mut GameState) {
    if state.phase != GamePhase::Running {
        return;
    }
    state.timer_secs -= 1;
    state.events.push(GameEvent::TimerChanged(state.timer_secs));
    if state.timer_secs <= 0 {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::GameLost);
        log::info!("run lost: time expired at score {}", state.score);
    }
}

/// Returns true when the run ended (terminal life loss)
fn lose_life(state: &mut GameState) -> bool {
    state.lives = state.lives.saturating_sub(1);
    state.events.push(GameEvent::BallLost);
    state.events.push(GameEvent::LivesChanged(state.lives));

    if state.lives == 0 {
        state.phase = GamePhase::Lost;
        state.events.push(GameEvent::GameLost);
        log::info!("run lost: out of lives at score {}", state.score);
        return true;
    }

    state.reset_ball_and_paddle();
    state.set_combo(1);
    false
}

/// Resolve at most one brick hit against the ball's current center
fn resolve_brick_hit(state: &mut GameState) {
    let Some((col, row)) = collision::find_brick_hit(&state.bricks, state.ball.pos) else {
        return;
    };

    state.ball.vel.y = -state.ball.vel.y;

    let (destroyed, center) = match state.bricks.get_mut(col, row) {
        Some(brick) => {
            brick.status -= 1;
            (brick.is_destroyed(), brick.center())
        }
        None => return,
    };
    state.set_combo(state.combo_count + 1);

    if destroyed {
        state
            .events
            .push(GameEvent::BrickDestroyed { col: col as u32, row: row as u32 });
        particles::spawn_explosion(&mut state.particles, center, &mut state.rng);
        award_points(state, 10 + state.combo_count * 2);
    }
}

fn award_points(state: &mut GameState, points: u32) {
    state.score += points;
    state.events.push(GameEvent::ScoreChanged(state.score));

    if state.score >= state.score_threshold {
        grant_threshold_bonus(state);
        state.score_threshold += THRESHOLD_STEP;
    }
}

/// 50/50 milestone reward: extra time or an extra life
fn grant_threshold_bonus(state: &mut GameState) {
    if state.rng.random::<bool>() {
        state.timer_secs += TIME_BONUS_SECS;
        state.events.push(GameEvent::BonusTime);
        state.events.push(GameEvent::TimerChanged(state.timer_secs));
        log::info!(
            "score {} crossed {}: +{}s",
            state.score,
            state.score_threshold,
            TIME_BONUS_SECS
        );
    } else {
        state.lives += 1;
        state.events.push(GameEvent::BonusLife);
        state.events.push(GameEvent::LivesChanged(state.lives));
        log::info!(
            "score {} crossed {}: +1 life",
            state.score,
            state.score_threshold
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Difficulty;
    use crate::sim::layout::CanvasSize;
    use glam::Vec2;

    const CANVAS: CanvasSize = CanvasSize {
        width: 800.0,
        height: 600.0,
    };

    fn easy_state(seed: u64) -> GameState {
        GameState::new(Difficulty::Easy, CANVAS, seed)
    }

    /// Park the ball mid-canvas so walls, paddle and bricks stay out of reach
    fn park_ball(state: &mut GameState) {
        state.ball.pos = Vec2::new(400.0, 400.0);
        state.ball.vel = Vec2::new(0.0, 0.0);
    }

    #[test]
    fn test_first_brick_destroy_scores() {
        // easy: 6x3 grid, every brick takes exactly one hit
        let mut state = easy_state(11);
        let target = *state.bricks.get(0, 0).unwrap();
        assert_eq!(target.max_hits, 1);

        state.ball.pos = target.center();
        state.ball.vel = Vec2::new(0.0, 2.0);
        tick(&mut state, &FrameInput::default());

        assert!(state.bricks.get(0, 0).unwrap().is_destroyed());
        assert_eq!(state.combo_count, 1);
        // 10 + combo * 2
        assert_eq!(state.score, 12);
        // Bounce reversed dy before integration
        assert_eq!(state.ball.vel.y, -2.0);
        assert!(!state.particles.is_empty());
        assert!(state.events.contains(&GameEvent::BrickDestroyed { col: 0, row: 0 }));
    }

    #[test]
    fn test_multi_hit_brick_survives_first_hit() {
        let mut state = GameState::new(Difficulty::Hard, CANVAS, 5);
        let (col, row, before) = state
            .bricks
            .columns()
            .iter()
            .enumerate()
            .find_map(|(c, column)| {
                column
                    .iter()
                    .enumerate()
                    .find(|(_, b)| b.max_hits >= 2)
                    .map(|(r, b)| (c, r, *b))
            })
            .expect("hard grid should contain a multi-hit brick");

        state.ball.pos = before.center();
        state.ball.vel = Vec2::new(0.0, 4.0);
        tick(&mut state, &FrameInput::default());

        let after = state.bricks.get(col, row).unwrap();
        assert_eq!(after.status, before.status - 1);
        assert!(!after.is_destroyed());
        assert_eq!(state.score, 0);
        assert_eq!(state.combo_count, 1);
    }

    #[test]
    fn test_combo_grows_and_paddle_bounce_resets_it() {
        let mut state = easy_state(2);
        state.combo_count = 4;

        // Paddle bounce: ball crossing the paddle band over the paddle
        state.ball.pos = Vec2::new(state.paddle.x + 25.0, 579.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        tick(&mut state, &FrameInput::default());

        assert_eq!(state.combo_count, 1);
        assert_eq!(state.ball.vel.y, -state.ball.base_speed);
        // Quarter-width hit deflects left at half base speed
        assert!((state.ball.vel.x - -state.ball.base_speed / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_life_loss_resets_ball_and_paddle() {
        let mut state = easy_state(3);
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(700.0, 589.0);
        state.ball.vel = Vec2::new(0.0, 3.0);
        state.combo_count = 7;

        tick(&mut state, &FrameInput::default());

        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.combo_count, 1);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 570.0));
        assert_eq!(state.paddle.x, 350.0);
        assert!(state.events.contains(&GameEvent::BallLost));
    }

    #[test]
    fn test_final_life_loss_is_terminal() {
        let mut state = GameState::new(Difficulty::Hard, CANVAS, 4);
        assert_eq!(state.lives, 1);
        state.paddle.x = 0.0;
        state.ball.pos = Vec2::new(700.0, 589.0);
        state.ball.vel = Vec2::new(0.0, 4.0);

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, GamePhase::Lost);
        assert!(state.events.contains(&GameEvent::GameLost));

        // Terminal state halts further physics
        let frozen = state.ball.pos;
        let frames = state.frame_count;
        tick(&mut state, &FrameInput::default());
        assert_eq!(state.ball.pos, frozen);
        assert_eq!(state.frame_count, frames);
    }

    #[test]
    fn test_timer_expiry_is_terminal() {
        let mut state = easy_state(6);
        for _ in 0..59 {
            second_tick(&mut state);
        }
        assert_eq!(state.timer_secs, 1);
        assert_eq!(state.phase, GamePhase::Running);

        second_tick(&mut state);
        assert_eq!(state.timer_secs, 0);
        assert_eq!(state.phase, GamePhase::Lost);

        // Stopped: no further decrements
        second_tick(&mut state);
        assert_eq!(state.timer_secs, 0);
    }

    #[test]
    fn test_win_when_grid_cleared() {
        let mut state = easy_state(8);
        for brick in state.bricks.iter_mut() {
            brick.status = 0;
        }
        // Leave one brick and destroy it through play
        state.bricks.get_mut(2, 1).unwrap().status = 1;
        let center = state.bricks.get(2, 1).unwrap().center();
        state.ball.pos = center;
        state.ball.vel = Vec2::new(0.0, 2.0);

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.phase, GamePhase::Won);
        assert!(state.events.contains(&GameEvent::GameWon));
        // The win check fires before integration
        assert_eq!(state.ball.pos, center);
    }

    #[test]
    fn test_threshold_bonus_grants_exactly_one_reward() {
        let mut state = easy_state(9);
        state.score = 48;
        state.bricks.get_mut(0, 0).unwrap().status = 1;
        let lives_before = state.lives;
        let timer_before = state.timer_secs;

        state.ball.pos = state.bricks.get(0, 0).unwrap().center();
        state.ball.vel = Vec2::new(0.0, 2.0);
        tick(&mut state, &FrameInput::default());

        // 48 + 12 = 60 crosses the easy threshold of 50
        assert_eq!(state.score, 60);
        assert_eq!(state.score_threshold, 100);
        let got_time = state.timer_secs == timer_before + TIME_BONUS_SECS;
        let got_life = state.lives == lives_before + 1;
        assert!(got_time ^ got_life);
    }

    #[test]
    fn test_wall_bounce_preserves_speed() {
        let mut state = easy_state(10);
        park_ball(&mut state);
        state.ball.pos = Vec2::new(789.0, 300.0);
        state.ball.vel = Vec2::new(2.0, 2.0);

        tick(&mut state, &FrameInput::default());
        assert_eq!(state.ball.vel, Vec2::new(-2.0, 2.0));
        // Impact burst spawned alongside the passive trail particle
        assert!(state.trail_particles.len() > 1);
    }

    #[test]
    fn test_pointer_overrides_keys() {
        let mut state = easy_state(12);
        park_ball(&mut state);
        let input = FrameInput {
            left_held: true,
            right_held: false,
            pointer_x: Some(600.0),
        };
        tick(&mut state, &input);
        assert_eq!(state.paddle.x, 550.0);
    }

    #[test]
    fn test_trail_pool_capped_over_long_run() {
        let mut state = easy_state(13);
        park_ball(&mut state);
        // Pin the ball against the wall so impact bursts fire repeatedly
        for _ in 0..500 {
            state.ball.pos = Vec2::new(789.0, 300.0);
            state.ball.vel = Vec2::new(2.0, 0.0);
            tick(&mut state, &FrameInput::default());
            assert!(state.trail_particles.len() <= MAX_TRAIL_PARTICLES);
        }
    }

    #[test]
    fn test_determinism() {
        let mut a = easy_state(99);
        let mut b = easy_state(99);
        let inputs = [
            FrameInput {
                right_held: true,
                ..Default::default()
            },
            FrameInput::default(),
            FrameInput {
                left_held: true,
                ..Default::default()
            },
        ];

        for _ in 0..200 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.score, b.score);
        assert_eq!(a.frame_count, b.frame_count);
        assert_eq!(a.paddle.x, b.paddle.x);
    }
}

//! Combo Breaker entry point
//!
//! Headless demo: a scripted player tracks the ball with the pointer for one
//! run, then the final scene is printed as JSON. Real frontends drive
//! `GameDriver` the same way from their own display loop.

use combo_breaker::sim::GamePhase;
use combo_breaker::{CanvasSize, Difficulty, FrameStatus, GameDriver};

const FRAME_DT: f64 = 1.0 / 60.0;
const MAX_FRAMES: u64 = 60 * 60 * 5;

fn main() {
    env_logger::init();

    let canvas = CanvasSize {
        width: 800.0,
        height: 600.0,
    };
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xC0FFEE);

    let mut driver = GameDriver::new(canvas);
    let handle = driver.select_difficulty(Difficulty::Easy, seed, 0.0);

    let mut now = 0.0;
    for _ in 0..MAX_FRAMES {
        // Scripted player: keep the paddle under the ball
        driver.input.pointer_x = driver.state().map(|s| s.ball.pos.x);

        let status = driver.frame(handle, now);
        for event in driver.drain_events() {
            log::debug!("{event:?}");
        }
        if status == FrameStatus::Stopped {
            break;
        }
        now += FRAME_DT;
    }

    if let Some(state) = driver.state() {
        let verdict = match state.phase {
            GamePhase::Won => "won",
            GamePhase::Lost => "lost",
            _ => "still going (frame budget exhausted)",
        };
        println!(
            "{verdict}: score {} | lives {} | {} bricks left | {}s on the clock",
            state.score,
            state.lives,
            state.bricks.remaining(),
            state.timer_secs
        );
    }

    if let Some(scene) = driver.scene() {
        match serde_json::to_string_pretty(&scene) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("scene serialization failed: {e}"),
        }
    }
}

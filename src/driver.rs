//! Frame driver
//!
//! Owns the run state and the two scheduled activities of the game: the
//! self-rescheduling per-frame step and the one-second countdown interval.
//! Both ride on [`GameDriver::frame`], which the host calls once per display
//! refresh with the current wall-clock time. Restarting a run bumps a
//! generation counter, so a frame chain scheduled before the restart goes
//! stale instead of running alongside the new one.

use serde::Serialize;

use crate::config::Difficulty;
use crate::sim::layout::CanvasSize;
use crate::sim::scene::Scene;
use crate::sim::state::{GameEvent, GamePhase, GameState};
use crate::sim::tick::{FrameInput, second_tick, tick};

/// Ticket for one frame chain; stale handles are silently ignored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHandle {
    generation: u64,
}

/// What the host should do after a frame call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStatus {
    /// Schedule another frame
    Continue,
    /// The run ended or the handle went stale; stop this chain
    Stopped,
}

/// Optional background image resource. The core only tracks presence and
/// size; pixels stay with the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BackgroundImage {
    pub width: u32,
    pub height: u32,
}

/// Drives the simulation from host callbacks
pub struct GameDriver {
    canvas: CanvasSize,
    state: Option<GameState>,
    /// Host-owned input state, sampled every frame
    pub input: FrameInput,
    background: Option<BackgroundImage>,
    generation: u64,
    /// Wall-clock time of the last countdown dispatch
    last_second: f64,
}

impl GameDriver {
    pub fn new(canvas: CanvasSize) -> Self {
        Self {
            canvas,
            state: None,
            input: FrameInput::default(),
            background: None,
            generation: 0,
            last_second: 0.0,
        }
    }

    /// Start (or restart) a run. Any handle issued earlier goes stale, which
    /// cancels its frame chain and countdown in one move.
    pub fn select_difficulty(&mut self, difficulty: Difficulty, seed: u64, now: f64) -> FrameHandle {
        self.generation += 1;
        self.last_second = now;
        self.state = Some(GameState::new(difficulty, self.canvas, seed));
        log::info!("starting {} run (seed {seed})", difficulty.as_str());
        FrameHandle {
            generation: self.generation,
        }
    }

    /// Difficulty selection by external name. Unknown names are rejected and
    /// the current run, if any, is left untouched.
    pub fn select_difficulty_by_name(
        &mut self,
        name: &str,
        seed: u64,
        now: f64,
    ) -> Option<FrameHandle> {
        match Difficulty::from_str(name) {
            Some(difficulty) => Some(self.select_difficulty(difficulty, seed, now)),
            None => {
                log::warn!("ignoring unknown difficulty {name:?}");
                None
            }
        }
    }

    /// Run one frame: dispatch any elapsed countdown seconds, then one
    /// simulation tick. The countdown runs first so an expired timer ends the
    /// run before any mid-frame mutation.
    pub fn frame(&mut self, handle: FrameHandle, now: f64) -> FrameStatus {
        if handle.generation != self.generation {
            return FrameStatus::Stopped;
        }
        let Some(state) = self.state.as_mut() else {
            return FrameStatus::Stopped;
        };

        while now - self.last_second >= 1.0 && state.phase == GamePhase::Running {
            self.last_second += 1.0;
            second_tick(state);
        }
        if state.phase != GamePhase::Running {
            return FrameStatus::Stopped;
        }

        tick(state, &self.input);

        match state.phase {
            GamePhase::Running => FrameStatus::Continue,
            _ => FrameStatus::Stopped,
        }
    }

    /// The renderable state for this frame, if a run exists
    pub fn scene(&self) -> Option<Scene<'_>> {
        self.state.as_ref().map(Scene::capture)
    }

    /// Drain pending observer events; empty when no run exists
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.state
            .as_mut()
            .map(GameState::drain_events)
            .unwrap_or_default()
    }

    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Phase of the current run; `Idle` before any difficulty is chosen
    pub fn phase(&self) -> GamePhase {
        self.state.as_ref().map_or(GamePhase::Idle, |s| s.phase)
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    /// Install or clear the optional background. A failed load means "no
    /// background", never an error for the simulation.
    pub fn set_background<E: std::fmt::Display>(&mut self, image: Result<BackgroundImage, E>) {
        match image {
            Ok(img) => self.background = Some(img),
            Err(e) => {
                log::warn!("background image rejected: {e}");
                self.background = None;
            }
        }
    }

    pub fn background(&self) -> Option<BackgroundImage> {
        self.background
    }
}

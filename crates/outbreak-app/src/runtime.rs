//! Shell loop: runs the simulation at 60Hz against an input source
//! and a render surface.
//!
//! The loop itself is deliberately thin: poll held controls, tick the
//! engine, draw the snapshot, sleep off the remainder of the tick. All
//! game rules live behind `SimulationEngine::tick`.

use std::time::{Duration, Instant};

use outbreak_core::constants::TICK_RATE;
use outbreak_core::input::InputState;
use outbreak_core::state::FrameSnapshot;
use outbreak_sim::engine::SimulationEngine;

use crate::render::{draw_frame, Surface};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Source of per-tick held-control snapshots.
pub trait InputSource {
    /// Sample which controls are held right now.
    fn poll(&mut self) -> InputState;

    /// True once the user asked to close the shell. The loop exits
    /// before the next tick; mid-run state is discarded.
    fn quit_requested(&self) -> bool;
}

/// Replays a fixed script, one entry per poll, idling after the script
/// runs out. Requests quit once `budget` polls have been consumed.
pub struct ScriptedInput {
    script: Vec<InputState>,
    cursor: usize,
    budget: u64,
}

impl ScriptedInput {
    pub fn new(script: Vec<InputState>, budget: u64) -> Self {
        Self {
            script,
            cursor: 0,
            budget,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> InputState {
        let held = self.script.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        held
    }

    fn quit_requested(&self) -> bool {
        self.cursor as u64 >= self.budget
    }
}

/// Run the shell loop until the input source requests quit.
///
/// Returns the last snapshot produced, if any tick ran. The loop keeps
/// drawing through Paused and GameOver, since the engine publishes
/// frozen snapshots for those phases.
pub fn run(
    engine: &mut SimulationEngine,
    input: &mut impl InputSource,
    surface: &mut impl Surface,
) -> Option<FrameSnapshot> {
    let mut last = None;
    let mut next_tick_time = Instant::now();

    while !input.quit_requested() {
        let held = input.poll();

        let snapshot = engine.tick(&held);
        draw_frame(&snapshot, surface);
        last = Some(snapshot);

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // More than two ticks behind: snap the deadline forward
            // rather than sprinting to catch up
            next_tick_time = now;
        }
    }

    last
}

//! Fixed-timestep simulation engine.
//!
//! `SimulationEngine` owns the hecs world plus the run state around it
//! (clock, phase, RNG, spawner, queued control commands) and turns one
//! `InputState` per tick into a `FrameSnapshot`. Headless by
//! construction, so tests drive it tick by tick with no shell attached.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use outbreak_core::commands::ControlCommand;
use outbreak_core::components::Health;
use outbreak_core::enums::GamePhase;
use outbreak_core::events::GameEvent;
use outbreak_core::input::InputState;
use outbreak_core::state::FrameSnapshot;
use outbreak_core::types::SimTime;

use crate::systems;
use crate::systems::spawner::SpawnClock;
use crate::world_setup;

/// Configuration for starting a new simulation.
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same run.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Running score, kept outside the ECS world.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreState {
    pub zombies_spawned: u32,
    pub zombies_slain: u32,
    pub shots_fired: u32,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: hecs::Entity,
    spawn_clock: SpawnClock,
    command_queue: VecDeque<ControlCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config. The run
    /// starts Active with the player already in the world.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let player = world_setup::spawn_player(&mut world);
        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player,
            spawn_clock: SpawnClock::default(),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            score: ScoreState::default(),
        }
    }

    /// Queue a control command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: ControlCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = ControlCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting
    /// snapshot.
    ///
    /// `input` is this tick's held-control state. While Paused or
    /// GameOver no system runs and time stands still, but commands are
    /// still processed and a snapshot is still produced.
    pub fn tick(&mut self, input: &InputState) -> FrameSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems(input);
            self.time.advance();
            self.check_game_over();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.world, &self.time, self.phase, events, &self.score)
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn a zombie at an exact position (for testing).
    #[cfg(test)]
    pub fn spawn_test_zombie(&mut self, pos: glam::Vec2) -> hecs::Entity {
        let id = self.spawn_clock.next_id;
        self.spawn_clock.next_id += 1;
        world_setup::spawn_zombie_at(&mut self.world, pos, id, self.player)
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single control command.
    fn handle_command(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            ControlCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            ControlCommand::Restart => {
                let survived = self.time.tick;
                self.world.clear();
                self.player = world_setup::spawn_player(&mut self.world);
                self.spawn_clock = SpawnClock::default();
                self.score = ScoreState::default();
                self.events.clear();
                self.time = SimTime::default();
                self.phase = GamePhase::Active;
                log::info!("restart after {survived} ticks");
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputState) {
        // 1. Player (steering, movement, firing, bolt flight + impacts)
        systems::player::run(
            &mut self.world,
            self.player,
            input,
            &mut self.rng,
            &mut self.events,
            &mut self.score,
        );
        // 2. Edge spawner
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.spawn_clock,
            &mut self.score,
            self.player,
        );
        // 3. Zombie pursuit + contact damage
        systems::pursuit::run(&mut self.world, &mut self.events);
        // 4. Cleanup (despawn dead zombies)
        systems::cleanup::run(
            &mut self.world,
            &mut self.despawn_buffer,
            &mut self.events,
            &mut self.score,
        );
        // 5. Impact bursts (survivors only)
        systems::effects::run(&mut self.world, &mut self.rng);
    }

    /// Transition to GameOver on the tick health reaches zero. The
    /// world is left intact for the final snapshot.
    fn check_game_over(&mut self) {
        let depleted = match self.world.get::<&Health>(self.player) {
            Ok(health) => health.current <= 0,
            Err(_) => false,
        };
        if depleted {
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver {
                ticks_survived: self.time.tick,
            });
            log::info!("player down after {} ticks", self.time.tick);
        }
    }
}

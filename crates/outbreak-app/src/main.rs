use clap::Parser;
use log::info;

use outbreak_app::render::NullSurface;
use outbreak_app::runtime::{self, ScriptedInput};
use outbreak_core::input::InputState;
use outbreak_sim::engine::{SimConfig, SimulationEngine};

/// Headless OUTBREAK run: simulates a scripted session at 60Hz and
/// reports the final score.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed for the run
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Ticks to simulate before exiting
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    outbreak_app::logging::init(args.verbose);

    let mut engine = SimulationEngine::new(SimConfig { seed: args.seed });
    let mut input = ScriptedInput::new(demo_script(args.ticks), args.ticks);
    let mut surface = NullSurface;

    info!("starting run: seed={} ticks={}", args.seed, args.ticks);
    let last = runtime::run(&mut engine, &mut input, &mut surface);

    if let Some(snapshot) = last {
        info!(
            "run ended at tick {} in phase {:?}: {} zombies spawned, {} slain, {} shots fired",
            snapshot.time.tick,
            snapshot.phase,
            snapshot.score.zombies_spawned,
            snapshot.score.zombies_slain,
            snapshot.score.shots_fired,
        );
    }
}

/// Canned session: circle while holding fire, so spawning, pursuit,
/// hits, and bursts all come up.
fn demo_script(ticks: u64) -> Vec<InputState> {
    let combat = InputState {
        turn_right: true,
        forward: true,
        fire: true,
        ..InputState::idle()
    };
    vec![combat; ticks as usize]
}

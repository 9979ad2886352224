use gravsim::{Diagnostics, Integrator, Scenario, ScenarioConfig};

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless N-body gravity simulation")]
struct Args {
    /// Scenario file, either a path or a name under scenarios/
    #[arg(short, long, default_value = "two_body.yaml")]
    file_name: String,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 1000)]
    steps: u64,

    /// Log a report every N steps, 0 for none
    #[arg(short, long, default_value_t = 100)]
    report_every: u64,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn report(sim: &Integrator, initial: &Diagnostics) {
    let d = Diagnostics::measure(sim.system(), sim.parameters());
    info!(
        "step {:6} t = {:9.4} E = {:+.6e} drift = {:.3e} p = ({:+.3e}, {:+.3e})",
        sim.steps(),
        d.t,
        d.energy(),
        d.energy_drift(initial),
        d.momentum.x,
        d.momentum.y
    );
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let path = scenario_path(&args.file_name);

    let cfg = ScenarioConfig::load(&path)
        .with_context(|| format!("failed to load scenario {}", path.display()))?;
    let mut sim = Scenario::build_scenario(&cfg)
        .with_context(|| format!("invalid scenario {}", path.display()))?;

    if sim.bodies().len() == 1 {
        warn!("single body scenario, nothing will attract it");
    }

    let initial = Diagnostics::measure(sim.system(), sim.parameters());
    report(&sim, &initial);

    // step then read, once per tick
    for _ in 0..args.steps {
        sim.step();
        if args.report_every > 0 && sim.steps() % args.report_every == 0 {
            report(&sim, &initial);
        }
    }

    for (i, b) in sim.current_state().enumerate() {
        info!(
            "body {} ({}): m = {} x = ({:+.6}, {:+.6}) v = ({:+.6}, {:+.6}) path = {} points",
            i,
            b.tag,
            b.mass,
            b.position.x,
            b.position.y,
            b.velocity.x,
            b.velocity.y,
            b.trajectory.len()
        );
    }

    Ok(())
}

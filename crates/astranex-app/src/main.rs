use std::path::PathBuf;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use astranex_app::game_loop;
use astranex_app::state::AppState;
use astranex_core::commands::ScenarioCommand;
use astranex_core::enums::{Location, ScenarioPhase, Strategy};
use astranex_core::events::EngineEvent;
use astranex_core::state::ScenarioSnapshot;
use astranex_sim::{ScenarioEngine, SimConfig, ThreatReport};

#[derive(Parser)]
#[command(name = "astranex", about = "Asteroid impact and planetary defense simulator")]
struct Cli {
    /// Path to an engine config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog id of the asteroid to simulate
    #[arg(long, default_value = "bennu")]
    asteroid: String,

    /// Impact location display name, e.g. "Europe"
    #[arg(long, default_value = "Bay of Bengal")]
    location: String,

    /// kinetic, tractor or nuclear
    #[arg(long, default_value = "kinetic")]
    strategy: String,

    #[arg(long, default_value_t = 500)]
    lead_days: u32,

    #[arg(long, default_value_t = 1000.0)]
    impactor_mass_kg: f64,

    /// Confirm evacuation automatically if the defense fails
    #[arg(long)]
    evacuate: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn parse_strategy(name: &str) -> Result<Strategy> {
    match name.to_ascii_lowercase().as_str() {
        "kinetic" => Ok(Strategy::Kinetic),
        "tractor" | "gravity-tractor" => Ok(Strategy::GravityTractor),
        "nuclear" => Ok(Strategy::NuclearDisruption),
        other => bail!("unknown strategy '{other}' (expected kinetic, tractor or nuclear)"),
    }
}

/// Commands that configure, simulate and defend against the requested scenario.
fn setup_commands(cli: &Cli) -> Result<Vec<ScenarioCommand>> {
    let location = Location::from_name(&cli.location)
        .with_context(|| format!("Unknown location '{}'", cli.location))?;
    let strategy = parse_strategy(&cli.strategy)?;
    Ok(vec![
        ScenarioCommand::SelectAsteroid {
            asteroid_id: cli.asteroid.clone(),
            location: Some(location),
        },
        ScenarioCommand::SetStrategy { strategy },
        ScenarioCommand::SetLeadTime {
            days: cli.lead_days,
        },
        ScenarioCommand::SetImpactorMass {
            kg: cli.impactor_mass_kg,
        },
        ScenarioCommand::RunSimulation,
        ScenarioCommand::DeployMitigation,
    ])
}

/// Apply the commands to a scratch engine so a rejected setting fails the
/// run instead of falling back to its default.
fn check_setup(config: &SimConfig, commands: &[ScenarioCommand]) -> Result<()> {
    let mut engine = ScenarioEngine::new(config.clone());
    for command in commands {
        engine
            .apply(command.clone())
            .with_context(|| format!("{} rejected", command.name()))?;
    }
    Ok(())
}

fn wait_until(
    state: &AppState,
    rejections: &mpsc::Receiver<String>,
    timeout: Duration,
    done: impl Fn(&ScenarioSnapshot) -> bool,
) -> Result<ScenarioSnapshot> {
    let deadline = Instant::now() + timeout;
    loop {
        if let Ok(reason) = rejections.try_recv() {
            bail!("scenario loop rejected a command: {reason}");
        }
        if let Some(snapshot) = state.snapshot() {
            if done(&snapshot) {
                return Ok(snapshot);
            }
        }
        if Instant::now() > deadline {
            bail!("timed out waiting for the scenario to settle");
        }
        std::thread::sleep(Duration::from_millis(10));
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("astranex=info")),
        )
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SimConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SimConfig::default(),
    };
    let commands = setup_commands(&cli)?;
    check_setup(&config, &commands)?;

    let settle_timeout = Duration::from_secs_f64(
        (config.deflection_delay_secs + config.evacuation_delay_secs) * 4.0 + 10.0,
    );

    let state = AppState::new();
    let (rejected_tx, rejections) = mpsc::channel::<String>();
    let handle = game_loop::start(&state, config, move |snapshot| {
        for event in &snapshot.events {
            if let EngineEvent::CommandRejected { command, reason } = event {
                let _ = rejected_tx.send(format!("{command}: {reason}"));
            }
        }
    })?;

    for command in commands {
        state.send(command)?;
    }

    let settled = wait_until(&state, &rejections, settle_timeout, |s| {
        matches!(
            s.phase,
            ScenarioPhase::Success | ScenarioPhase::EvacuationPending
        )
    })?;

    let final_snapshot = if settled.phase == ScenarioPhase::EvacuationPending && cli.evacuate {
        state.send(ScenarioCommand::ConfirmEvacuation)?;
        wait_until(&state, &rejections, settle_timeout, |s| {
            s.phase == ScenarioPhase::ImpactAfterEvacuation
        })?
    } else {
        settled
    };

    state.shutdown()?;
    if handle.join().is_err() {
        bail!("scenario loop panicked");
    }

    let report = ThreatReport::from_scenario(
        final_snapshot.phase,
        &final_snapshot.inputs,
        final_snapshot
            .effects
            .as_ref()
            .context("scenario produced no impact effects")?,
        final_snapshot.attempt.as_ref(),
        final_snapshot.evacuation_plan.as_ref(),
        final_snapshot.fatalities_mitigated_millions,
    )
    .context("scenario is incomplete")?;

    tracing::info!(file = %report.file_stem(), "Report ready");
    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        print!("{report}");
    }
    Ok(())
}

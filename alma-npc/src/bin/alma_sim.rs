//! ALMA mood simulator.
//!
//! Loads a character definition, holds its emotions constant, and prints
//! the mood trajectory as it is pulled toward the emotions and back to the
//! personality's default.
//!
//! Usage:
//!   alma-sim <CHARACTER.toml> [OPTIONS]
//!
//! Options:
//!   --config <PATH>        Engine configuration (TOML); defaults apply when absent
//!   --seconds <N>          Simulated duration, default: 1200
//!   --report-every <N>     Seconds between printed rows, default: 60

use std::path::PathBuf;

use alma_core::AlmaConfig;
use alma_npc::{AffectSystem, CharacterDefinition};
use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

const MAX_REPORT_ROWS: f64 = 1_000_000.0;

#[derive(Parser, Debug)]
#[command(name = "alma-sim")]
#[command(about = "Simulate a character's mood over time")]
struct Args {
    /// Character definition file.
    character: PathBuf,

    /// Engine configuration file.
    #[arg(long, env = "ALMA_CONFIG")]
    config: Option<PathBuf>,

    /// Total simulated time in seconds.
    #[arg(long, default_value_t = 1200.0)]
    seconds: f32,

    /// Seconds of simulated time between report rows.
    #[arg(long, default_value_t = 60.0)]
    report_every: f32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AlmaConfig::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AlmaConfig::default(),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if !(args.report_every.is_finite() && args.report_every > 0.0) {
        anyhow::bail!("--report-every must be a positive number of seconds");
    }
    if !(args.seconds.is_finite() && args.seconds >= 0.0) {
        anyhow::bail!("--seconds must be a non-negative number of seconds");
    }
    let rows = (f64::from(args.seconds) / f64::from(args.report_every)).ceil();
    if rows > MAX_REPORT_ROWS {
        anyhow::bail!(
            "{} seconds at one row every {} would print {rows} rows; raise --report-every",
            args.seconds,
            args.report_every
        );
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let rows = rows as u32;

    let definition = CharacterDefinition::from_file(&args.character)
        .with_context(|| format!("loading character {}", args.character.display()))?;
    let system = AffectSystem::from_config(&config);
    let mut component = definition.spawn();

    tracing::info!(
        name = %definition.name,
        personality = %definition.personality,
        default_mood = %component.default_mood(),
        emotions = definition.emotions.len(),
        "Character spawned"
    );
    if let Some(vec) = component.virtual_emotion_center() {
        println!(
            "{}: VEC {} at intensity {:.2}",
            definition.name,
            vec.center,
            vec.intensity.value()
        );
    }

    println!("{:>8}  {:<36}  mood", "t (s)", "PAD");
    println!(
        "{:>8.0}  {:<36}  {}",
        0.0,
        component.current_mood().to_string(),
        component.mood()
    );

    let mut elapsed = 0.0_f64;
    for row in 1..=rows {
        let until = (f64::from(row) * f64::from(args.report_every)).min(f64::from(args.seconds));
        #[allow(clippy::cast_possible_truncation)]
        system.tick(&mut component, (until - elapsed) as f32);
        elapsed = until;
        println!(
            "{:>8.0}  {:<36}  {}",
            elapsed,
            component.current_mood().to_string(),
            component.mood()
        );
    }

    Ok(())
}

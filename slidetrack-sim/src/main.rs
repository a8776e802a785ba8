use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use slidetrack_sim::output::write_records;
use slidetrack_sim::{Format, Scenario, Simulation, settings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(
    name = "slidetrack-sim",
    about = "Replay a carousel input script and print every rendered frame"
)]
struct Cli {
    /// Scenario TOML: page metrics plus an ordered list of events
    scenario: PathBuf,
    /// Carousel configuration TOML, overridable through SLIDETRACK__* variables
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Diagnostics go to stderr; stdout carries the records.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = settings::load(cli.config.as_deref())?;
    let scenario = Scenario::from_path(&cli.scenario)?;
    tracing::info!(
        cards = scenario.cards,
        viewport = scenario.viewport_width,
        events = scenario.events.len(),
        "replaying {}",
        cli.scenario.display()
    );

    let simulation = match Simulation::new(&scenario, config) {
        Ok(simulation) => simulation,
        Err(err) => {
            // An unbindable page is left alone, as a browser host would.
            tracing::debug!("{} not bound: {err}", cli.scenario.display());
            return Ok(());
        }
    };
    let records = simulation.run(&scenario.events).await;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_records(&mut out, &records, cli.format)?;
    out.flush()?;
    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use pointer_pick::app::App;
use pointer_pick::config::InteractionConfig;
use pointer_pick::health;

#[derive(Parser)]
#[command(name = "pointer-demo")]
#[command(about = "Drag a crate, press a HUD button and pan the camera")]
struct Cli {
    /// Configuration profile to load from config/{profile}.toml
    #[arg(short, long, env = "APP_PROFILE")]
    profile: Option<String>,

    /// Explicit configuration file, instead of a profile
    #[arg(short, long, conflicts_with = "profile")]
    config: Option<PathBuf>,

    /// Run self checks, print the report and exit
    #[arg(long)]
    health: bool,
}

fn load_config(cli: &Cli) -> Result<InteractionConfig> {
    let config = match (&cli.config, &cli.profile) {
        (Some(path), _) => InteractionConfig::load_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        (None, Some(profile)) => InteractionConfig::load(profile)
            .with_context(|| format!("loading profile '{profile}'"))?,
        (None, None) => InteractionConfig::load("debug").context("loading default profile")?,
    };
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    // RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.filter))
        .context("parsing log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if cli.health {
        let report = health::run_all_checks();
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let event_loop = EventLoop::new().context("creating event loop")?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(config);
    event_loop.run_app(&mut app).context("running event loop")?;

    info!("Event loop finished");
    Ok(())
}

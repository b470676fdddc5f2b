//! CLI entrypoint for devnotes
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use devnotes_application::{
    AutoAccept, ConfirmationPort, ManageNotesInput, ManageNotesUseCase, NoProgress,
    NotesProgressNotifier,
};
use devnotes_domain::{DeviceName, NotesRequest};
use devnotes_infrastructure::{ConfigLoader, GraphDeviceClient, session_provider_from_config};
use devnotes_presentation::{Cli, ConsoleFormatter, ConsolePrompt, SpinnerProgress};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_without_files()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    }
    .context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;
    debug!("Configuration: {:?}", config);

    if !config.output.color {
        ConsoleFormatter::set_color(false);
    }

    let device_name = match cli.device_name.as_deref() {
        Some(name) => DeviceName::try_new(name)?,
        None => bail!("Device name is required. Usage: devnotes <DEVICE_NAME> [NOTES]"),
    };
    let request = NotesRequest::from_argument(cli.notes);

    info!("Starting devnotes for device '{}'", device_name);

    // === Dependency Injection ===
    let http = GraphDeviceClient::http_client(config.graph.timeout_seconds)
        .context("Failed to build HTTP client")?;
    let sessions = session_provider_from_config(&config.auth, http.clone());
    let directory = Arc::new(GraphDeviceClient::from_config(&config.graph, http));
    let confirmation: Arc<dyn ConfirmationPort> = if cli.yes {
        Arc::new(AutoAccept)
    } else {
        Arc::new(ConsolePrompt::new())
    };

    let use_case = ManageNotesUseCase::new(sessions, directory).with_confirmation(confirmation);

    let input = ManageNotesInput::new(device_name, request)
        .with_dry_run(cli.what_if)
        .with_policy(config.lookup.policy);

    // Spinner output would interleave with debug logs
    let progress: Box<dyn NotesProgressNotifier> = if cli.verbose >= 2 {
        Box::new(NoProgress)
    } else {
        Box::new(SpinnerProgress::new())
    };

    let outcome = use_case
        .execute_with_progress(input, progress.as_ref())
        .await?;

    println!("{}", ConsoleFormatter::format(&outcome));

    Ok(())
}

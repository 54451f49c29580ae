//! Command line entry point.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{bail, Result};
use clap::Parser;
use sv_app::{ActionOutcome, DecodeResultsUseCase, PresentationState};
use sv_core::config::ViewerConfig;
use sv_core::ids::EntryId;
use sv_core::ports::ResultViewPort;
use sv_infra::{read_payload, PayloadSource};

use crate::bootstrap::tracing::init_tracing_subscriber;
use crate::bootstrap::{build_presenter, load_config};
use crate::terminal::TerminalResultView;

/// Exit status for a payload that could not be decoded at all.
pub const EXIT_MALFORMED: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "sauceview")]
#[command(about = "Render reverse image search results in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Search response JSON file, or `-` for stdin
    pub payload: PathBuf,

    /// TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Open the first link of entry N (1-based)
    #[arg(short, long, value_name = "N")]
    pub open: Option<usize>,

    /// Copy the title of entry N (1-based) to the clipboard
    #[arg(long, value_name = "N")]
    pub copy: Option<usize>,

    /// Send notifications to the log instead of stderr
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run one presentation from payload to settled thumbnails.
pub async fn run(cli: Cli) -> Result<ExitCode> {
    let (config, config_error) = resolve_config(cli.config.as_deref());

    if let Err(err) = init_tracing_subscriber(&config.logging) {
        eprintln!("Failed to initialize tracing: {err:#}");
    }
    if let Some(err) = config_error {
        tracing::warn!("falling back to default config: {err:#}");
    }

    let raw = read_payload(&PayloadSource::from_arg(&cli.payload)).await?;
    let decoded = DecodeResultsUseCase::new().execute(&raw);

    let presenter = build_presenter(&config, cli.quiet)?;
    let view: Arc<dyn ResultViewPort> = Arc::new(TerminalResultView::stdout());
    let mut session = presenter.present(decoded, view);

    if session.state() == PresentationState::Malformed {
        session.close();
        return Ok(ExitCode::from(EXIT_MALFORMED));
    }

    if let Some(number) = cli.open {
        let outcome = session.primary_action(entry_id_from_number(number)?)?;
        report_outcome(number, &outcome);
    }
    if let Some(number) = cli.copy {
        let outcome = session.secondary_action(entry_id_from_number(number)?)?;
        report_outcome(number, &outcome);
    }

    let delivered = session.wait_for_thumbnails().await;
    tracing::info!(delivered, entries = session.cards().len(), "thumbnails settled");
    session.close();

    Ok(ExitCode::SUCCESS)
}

/// Load the config named on the command line, falling back to defaults.
///
/// The load error is handed back instead of logged because tracing is not
/// initialized yet when this runs.
fn resolve_config(path: Option<&Path>) -> (ViewerConfig, Option<anyhow::Error>) {
    match path {
        None => (ViewerConfig::default(), None),
        Some(path) => match load_config(path) {
            Ok(config) => (config, None),
            Err(err) => (ViewerConfig::default(), Some(err)),
        },
    }
}

/// Map a 1-based entry number from the command line to an [`EntryId`].
pub fn entry_id_from_number(number: usize) -> Result<EntryId> {
    if number == 0 {
        bail!("Entry numbers start at 1");
    }
    Ok(EntryId::new(number - 1))
}

fn report_outcome(number: usize, outcome: &ActionOutcome) {
    match outcome {
        ActionOutcome::Opened { url } => tracing::info!(entry = number, %url, "opened link"),
        ActionOutcome::Copied { .. } => tracing::info!(entry = number, "copied title"),
        ActionOutcome::NoOp => eprintln!("Entry {number} has no link to open"),
    }
}

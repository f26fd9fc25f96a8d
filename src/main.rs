use std::io::{self, Write};

use accessible_spots::cli::{Cli, CliCommand};
use accessible_spots::session::SpotSession;
use accessible_spots::views::{SpotPopup, list_view};
use accessible_spots::{
    SpotCatalog, SpotId, SpotsConfig, SpotsError, interactive, logging, terminal,
};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = SpotsConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.display().to_string());
    }

    logging::init(&config.logging, cli.verbose)?;
    debug!(?config, "Configuration loaded");

    let catalog = SpotCatalog::from_config(&config.catalog).map_err(|e| {
        tracing::error!("{e}");
        anyhow::anyhow!(e.user_message())
    })?;
    info!("Catalog ready with {} spots", catalog.len());

    let mut session =
        SpotSession::with_dismiss_after(catalog, config.notification.dismiss_after());
    let mut stdout = io::stdout();

    match cli.command.unwrap_or(CliCommand::Interactive) {
        CliCommand::List {
            accessible_only,
            min_rating,
        } => {
            session.set_accessible_only(accessible_only);
            if let Some(input) = min_rating {
                session.set_min_rating_input(&input)?;
            }
            terminal::render_filters(&mut stdout, &session)?;
            terminal::render_list(&mut stdout, &list_view(&session))?;
        }
        CliCommand::Show { id } => {
            let spot = session
                .catalog()
                .get(SpotId(id))
                .ok_or_else(|| SpotsError::validation(format!("no spot with id {id}")))?;
            terminal::render_popup(&mut stdout, &SpotPopup::from(spot))?;
        }
        CliCommand::Interactive => {
            interactive::run(&mut session, config.filters.min_rating_step).await?;
        }
    }

    stdout.flush()?;
    Ok(())
}

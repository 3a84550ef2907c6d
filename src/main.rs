use anyhow::{bail, Context, Result};
use bubbletea_rs::Program;
use clap::Parser;
use tracing::info;

use animal_dictionary::app::{self, App, Launch};
use animal_dictionary::cli::CliArgs;
use animal_dictionary::dictionary::Dictionary;
use animal_dictionary::settings::Settings;
use animal_dictionary::{logging, source};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliArgs::parse();
    let settings = Settings::load(&cli)?;
    let _guard = logging::init(&settings.logging)?;

    let names = source::from_path(settings.source.as_deref());
    let dictionary = Dictionary::from_source(&*names, settings.variant)
        .with_context(|| format!("failed to load names from {}", names.describe()))?;
    info!(
        source = names.describe(),
        variant = %settings.variant,
        "starting animal dictionary"
    );

    if !app::configure(Launch {
        dictionary,
        title: settings.title.clone(),
    }) {
        bail!("application launch state was already configured");
    }

    let program = Program::<App>::builder()
        .alt_screen(true)
        .signal_handler(true)
        .build()
        .context("failed to build terminal program")?;
    program.run().await.context("terminal program failed")?;

    info!("animal dictionary exited");
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use log::{debug, info};
use webext_options::config::Config;
use webext_options::options::Options;

mod cli;
mod commands;
mod ui;

use cli::Cli;
use cli::commands::OptionsSubcommands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(backend) = cli.backend {
        config.backend = backend;
    }

    init_logger(&config)?;
    info!("Starting webext-options");
    debug!("Using config: {:?}", config);

    let storage = config.open_storage().await?;
    let options = Options::new(storage);

    match cli.command {
        OptionsSubcommands::List => commands::options::list_command(&options).await,
        OptionsSubcommands::Get { name, default } => {
            commands::options::get_command(&options, name, default).await
        }
        OptionsSubcommands::Default { name } => {
            commands::options::default_command(&options, name).await
        }
        OptionsSubcommands::Set {
            name,
            value,
            default,
        } => commands::options::set_command(&options, name, value, default).await,
        OptionsSubcommands::Append { name, suffix } => {
            commands::options::append_command(&options, name, suffix).await
        }
        OptionsSubcommands::Reset { name } => commands::options::reset_command(&options, name).await,
        OptionsSubcommands::ResetAll { force } => {
            commands::options::reset_all_command(&options, force).await
        }
        OptionsSubcommands::Remove { name } => {
            commands::options::remove_command(&options, name).await
        }
    }
}

/// Log to stderr, or to the configured log file (truncated on each run)
fn init_logger(config: &Config) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(path) = &config.log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

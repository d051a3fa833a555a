use super::commands::OptionsSubcommands;
use clap::Parser;
use std::path::PathBuf;
use webext_options::config::Backend;

#[derive(Parser)]
#[command(name = "webext-options")]
#[command(about = "Manage persistent options with defaults kept in a storage area")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Storage backend, overriding the config file
    #[arg(long, value_enum, global = true)]
    pub backend: Option<Backend>,

    #[command(subcommand)]
    pub command: OptionsSubcommands,
}

use clap::Subcommand;

#[derive(Subcommand)]
pub enum OptionsSubcommands {
    /// List every stored option with its value and default
    List,
    /// Print the value of an option, storing it first if it does not exist
    Get {
        /// Option name
        name: String,
        /// Default used when the option does not exist yet
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Print the default value of an option without storing anything
    Default {
        /// Option name
        name: String,
    },
    /// Set the value of an option
    Set {
        /// Option name
        name: String,
        /// New value
        value: String,
        /// Default used when the option does not exist yet
        #[arg(short, long)]
        default: Option<String>,
    },
    /// Append a suffix to the current value of an option
    Append {
        /// Option name
        name: String,
        /// Text appended to the current value
        suffix: String,
    },
    /// Reset an option to its default value
    Reset {
        /// Option name
        name: String,
    },
    /// Reset all options to their default values
    ResetAll {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
    /// Remove an option
    Remove {
        /// Option name
        name: String,
    },
}

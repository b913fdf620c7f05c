
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum Commands {
        /// Print the loaded config as JSON
    Show {
        /// Fail on a missing, unreadable, malformed or non-object file
        #[arg(short, long)]
        strict: bool,
    },
        /// List configured providers with masked keys
    List,
        /// Print the API key for a provider
    Get {
        provider: String,
    },
}

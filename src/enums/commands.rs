use clap::Subcommand;
use crate::config::constants::HISTORY_LIMIT;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the HTTP API and landing page
    Serve {
        #[clap(long)]
        host: Option<String>,
        #[clap(short, long)]
        port: Option<u16>,
        #[clap(short, long)]
        database: Option<String>,
    },
    /// Write a sample configuration file
    Init,
    /// Check the configuration for problems
    Validate,
    /// Print the most recent analyses
    History {
        #[clap(short, long, default_value_t = HISTORY_LIMIT)]
        limit: usize,
    },
}

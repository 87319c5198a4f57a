//! quotescope CLI - Historical stock prices with a moving average overlay.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use quotescope_lib::prelude::*;
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

mod commands;
mod display;
mod logging;

#[derive(Parser)]
#[command(name = "quotescope")]
#[command(about = "Daily stock prices with a simple moving average", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (errors only, no spinner)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Request timeout in seconds
    #[arg(long, default_value = "30", global = true)]
    timeout: u64,

    /// Hidden: alternate chart API host
    #[arg(long, hide = true, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch daily prices for a ticker and show them
    Fetch {
        /// Ticker symbol (e.g., AAPL, MSFT)
        ticker: String,

        /// Start date (YYYY-MM-DD). Defaults to one year before the end date.
        #[arg(short, long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        end: Option<String>,

        /// Moving average window in trading days
        #[arg(long, default_value = "20")]
        sma: NonZeroUsize,

        /// Number of most recent rows to show in the table
        #[arg(long, default_value = "10")]
        rows: usize,

        /// Write the data to this path ("-" for stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the data to <TICKER>_data.<format> in the current directory
        #[arg(long, conflicts_with = "output")]
        export: bool,

        /// Export format (csv, tsv, json, ndjson)
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,

        /// Skip the text charts
        #[arg(long)]
        no_charts: bool,
    },

    /// Interactive session that keeps its cache between requests
    Session {
        /// Initial moving average window in trading days
        #[arg(long, default_value = "20")]
        sma: NonZeroUsize,
    },
}

impl Cli {
    fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig {
            timeout: Duration::from_secs(self.timeout),
            ..Default::default()
        };
        if let Some(base_url) = &self.base_url {
            config.base_url.clone_from(base_url);
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let config = cli.client_config();

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    match command {
        Commands::Fetch {
            ticker,
            start,
            end,
            sma,
            rows,
            output,
            export,
            format,
            no_charts,
        } => {
            let options = commands::fetch::FetchOptions {
                start,
                end,
                sma,
                rows,
                output,
                export,
                format,
                charts: !no_charts,
                quiet: cli.quiet,
            };
            commands::fetch::fetch(&ticker, config, options).await
        }
        Commands::Session { sma } => commands::session::session(config, sma, cli.quiet).await,
    }
}

mod config;
mod consts;
mod environment;
mod events;
mod feed;
mod logging;
mod runtime;
mod session;
mod ui;

use crate::config::{Config, get_config_path};
use crate::environment::Environment;
use crate::session::{run_headless_mode, run_tui_mode, setup_session};
use clap::{Parser, Subcommand};
use std::error::Error;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Run without the terminal UI, printing feed events to stdout.
        #[arg(long)]
        headless: bool,

        /// Seed for the transfer generator. Same seed, same feed.
        #[arg(long, value_name = "SEED")]
        seed: Option<u64>,

        /// Show the connection indicator as disconnected.
        #[arg(long)]
        disconnected: bool,

        /// Starting value of the net-flow metric, in POL.
        #[arg(long, value_name = "POL")]
        initial_net_flow: Option<f64>,

        /// Enable the dashboard background color.
        #[arg(long)]
        with_background_color: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let environment_str = std::env::var("POLYGON_ENVIRONMENT").unwrap_or_default();
    let environment = environment_str
        .parse::<Environment>()
        .unwrap_or(Environment::default());

    let args = Args::parse();
    match args.command {
        Command::Start {
            headless,
            seed,
            disconnected,
            initial_net_flow,
            with_background_color,
        } => {
            // The config file supplies defaults; CLI flags override them.
            let mut config = Config::default();
            if let Ok(config_path) = get_config_path() {
                if config_path.exists() {
                    if let Ok(loaded) = Config::load_from_file(&config_path) {
                        config = loaded;
                    }
                }
            }
            if disconnected {
                config.connected = false;
            }
            if let Some(value) = initial_net_flow {
                config.initial_net_flow_pol = value;
            }

            let session = setup_session(config, environment, seed);
            if headless {
                run_headless_mode(session).await
            } else {
                run_tui_mode(session, with_background_color).await
            }
        }
    }
}

//! VeggieTools CLI: the main entry point.
//!
//! Commands:
//! - `serve`   Start the HTTP gateway
//! - `call`    Run one tool locally and print its text
//! - `tools`   Print the tool catalog
//! - `plants`  Print every plant key
//! - `init`    Write a default config file

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use veggietools_config::AppConfig;

mod commands;

#[derive(Parser)]
#[command(
    name = "veggietools",
    about = "VeggieTools: vegetable gardening tools over MCP",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to use instead of ~/.veggietools/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway server
    Serve {
        /// Override the bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run a tool without starting the server
    Call {
        /// Tool name, e.g. get_plant_info
        tool: String,

        /// Tool arguments as a JSON object
        #[arg(short, long, default_value = "{}")]
        args: String,
    },

    /// Print the tool catalog as JSON
    Tools,

    /// List every plant key in the knowledge store
    Plants,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    match cli.command {
        Commands::Serve { host, port } => commands::serve::run(&config_path, host, port).await?,
        Commands::Call { tool, args } => commands::call::run(&tool, &args)?,
        Commands::Tools => commands::tools::run()?,
        Commands::Plants => commands::plants::run(),
        Commands::Init { force } => commands::init::run(&config_path, force)?,
    }

    Ok(())
}

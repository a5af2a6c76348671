mod config;
mod error;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use executor::ToolKind;
use gateway::{BatchRequest, Gateway};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use error::{Error, Result};

const CONFIG_FILE: &str = "desk-agent.toml";

#[derive(Parser)]
#[command(name = "desk-agent")]
#[command(about = "Runs batches of host actions sent over HTTP", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ./desk-agent.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Address to bind, overriding the config file
        #[arg(long)]
        host: Option<String>,
        /// Port to bind, overriding the config file
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Run a batch from a JSON file (or stdin) and print the results
    Exec {
        /// File containing {"actions": [...]}; reads stdin when omitted
        file: Option<PathBuf>,
    },
    /// List supported tools
    Tools,
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

// Logs go to stderr so `exec` output on stdout stays valid JSON.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            let config = load_config(cli.config.as_deref())?.with_overrides(host, port);
            cmd_serve(&config).await
        }
        None => cmd_serve(&load_config(cli.config.as_deref())?).await,
        Some(Commands::Exec { file }) => cmd_exec(file.as_deref()).await,
        Some(Commands::Tools) => {
            cmd_tools();
            Ok(())
        }
    }
}

async fn cmd_serve(config: &Config) -> Result<()> {
    info!(version = env!("CARGO_PKG_VERSION"), "starting desk-agent");
    let listener = TcpListener::bind(config.address()).await?;
    gateway::serve(listener, Gateway::new()).await?;
    Ok(())
}

async fn cmd_exec(file: Option<&Path>) -> Result<()> {
    let input = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let batch = BatchRequest::from_json(input.as_bytes()).map_err(Error::InvalidBatch)?;
    let response = Gateway::new().dispatch(batch).await;

    let json = serde_json::to_string_pretty(&response).map_err(Error::Output)?;
    println!("{json}");
    Ok(())
}

fn cmd_tools() {
    println!("{:<20}  {:<8}  {:<24}  DESCRIPTION", "TOOL", "MODE", "ARGS");
    println!("{}", "-".repeat(90));

    for kind in ToolKind::ALL {
        let args = kind
            .args()
            .iter()
            .map(|a| {
                if a.required {
                    a.name.to_string()
                } else {
                    format!("[{}]", a.name)
                }
            })
            .collect::<Vec<_>>()
            .join(" ");
        let mode = match kind.mode() {
            executor::ExecutionMode::Launch => "launch",
            executor::ExecutionMode::Capture => "capture",
        };
        println!(
            "{:<20}  {:<8}  {:<24}  {}",
            kind.name(),
            mode,
            args,
            kind.description()
        );
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    if let Some(path) = path {
        return Ok(Config::load(path)?);
    }

    let default_path = PathBuf::from(CONFIG_FILE);
    if default_path.exists() {
        Ok(Config::load(&default_path)?)
    } else {
        Ok(Config::default())
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};
use zeno::cli::SendInput;

/// zeno - contact relay for The Zeno Creatives website
#[derive(Parser)]
#[command(name = "zeno")]
#[command(about = "Contact form mail relay and submission client", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP relay
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Submit one inquiry to a running relay
    Send {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        project_type: String,

        #[arg(long)]
        budget: String,

        #[arg(long)]
        message: String,

        /// Relay endpoint (overrides relay.url)
        #[arg(long)]
        url: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = zeno::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    zeno::observability::init_observability(
        "zeno",
        env!("CARGO_PKG_VERSION"),
        &config.logging,
    )?;

    match cli.command {
        Commands::Serve { host, port } => zeno::cli::serve(config, host, port).await,
        Commands::Send {
            name,
            email,
            project_type,
            budget,
            message,
            url,
        } => {
            let input = SendInput {
                name,
                email,
                project_type,
                budget,
                message,
                url,
            };
            zeno::cli::send(config, input).await
        }
    }
}

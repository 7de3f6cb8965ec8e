use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(about = "Fleetwatch CLI.")]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the dashboard HTTP server
    Http {
        #[arg(env = "FLEETWATCH_SERVER_ADDRESS", default_value = "0.0.0.0:3000")]
        address: std::net::SocketAddr,
    },
    /// Fetch and print the current dataset from a running server
    Fetch(FetchArgs),
    /// Generate a demo fleet and push it to a running server
    Seed(SeedArgs),
}

#[derive(Debug, Parser)]
pub struct FetchArgs {
    /// Base URL of the dashboard server
    #[arg(long, default_value = "http://localhost:3000")]
    pub url: String,
}

#[derive(Debug, Parser)]
pub struct SeedArgs {
    /// Base URL of the dashboard server
    #[arg(long, default_value = "http://localhost:3000")]
    pub url: String,
    /// Number of records per push
    #[arg(long, default_value_t = 25)]
    pub count: usize,
    /// How many times to push a fresh fleet
    #[arg(long, default_value_t = 1)]
    pub cycles: u32,
    /// Seconds between pushes
    #[arg(long, default_value_t = 2)]
    pub interval: u64,
    /// Don't print server responses
    #[arg(long)]
    pub silent: bool,
}

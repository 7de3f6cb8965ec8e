use clap::Parser;
use cli::{Cli, Command};

mod cli;
mod config;
mod models;
mod server;
mod store;
mod tools;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init();

    let args = Cli::parse();

    match args.cmd {
        Command::Http { address } => server::run(address).await,
        Command::Fetch(fetch_args) => tools::fetch::exec(&fetch_args).await.unwrap(),
        Command::Seed(seed_args) => tools::seed::exec(&seed_args).await.unwrap(),
    }
}

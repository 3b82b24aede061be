mod args;
mod commands;
mod config;

use clap::Parser;
use tracing::Level;

use crate::args::Args;

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(Level::INFO)
        .init();

    let args = Args::parse();
    if let Err(err) = commands::dispatch(args.command).await {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

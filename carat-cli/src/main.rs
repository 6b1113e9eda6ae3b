use clap::Parser;

mod cli;
mod commands;
mod error;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let args = Cli::parse();

    match args.command {
        Commands::Generate(generate) => generate.run().await,
        Commands::Edit(edit) => edit.run(),
    }
}

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "carat-cli")]
#[clap(about = "Generate and rewrite collectible metadata files", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

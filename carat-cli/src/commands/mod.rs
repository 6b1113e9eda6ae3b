use clap::Subcommand;

mod edit;
mod generate;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Generate(generate::Generate),
    Edit(edit::Edit),
}

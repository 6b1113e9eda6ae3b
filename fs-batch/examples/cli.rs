use anyhow::{Context, Result};
use fs_batch::editor::{edit, EditorConfig};
use fs_batch::generator::{generate, GeneratorConfig};
use std::{env, path::PathBuf};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
    }
}

async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        println!("Usage:");
        println!(" cargo run --example cli generate <dir> [count]");
        println!(" cargo run --example cli edit <dir>");
        return Ok(());
    }

    let command = &args[1];
    let dir = PathBuf::from(&args[2]);
    match command.as_str() {
        "generate" => {
            let mut config = GeneratorConfig {
                target_dir: dir,
                ..GeneratorConfig::default()
            };
            if let Some(count) = args.get(3) {
                config.count = count
                    .parse()
                    .context("count must be a number")?;
            }
            let report = generate(&config)
                .await
                .context("Failed to generate metadata files")?;
            println!(
                "{} files written, {} failed",
                report.written.len(),
                report.failed.len()
            );
        }
        "edit" => {
            let config = EditorConfig {
                source_dir: dir,
                ..EditorConfig::default()
            };
            let report =
                edit(&config).context("Failed to rewrite metadata files")?;
            println!(
                "{} files rewritten, {} skipped",
                report.edited.len(),
                report.skipped
            );
        }
        _ => {
            eprintln!("Invalid command. Use 'generate' or 'edit'.");
        }
    }
    Ok(())
}

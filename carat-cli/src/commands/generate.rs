use std::path::PathBuf;

use fs_batch::generator::{generate, GeneratorConfig};

use crate::error::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "generate", about = "Populate a folder with numbered metadata files")]
pub struct Generate {
    #[clap(
        value_parser,
        default_value = fs_batch::TARGET_FOLDER,
        help = "Folder the metadata files are written to"
    )]
    target_dir: PathBuf,
    #[clap(
        short,
        long,
        default_value_t = fs_batch::TOKEN_COUNT,
        help = "How many files to produce"
    )]
    count: usize,
    #[clap(
        long,
        default_value_t = fs_batch::BASE_SERIAL,
        help = "Offset added to the index to form the serial number"
    )]
    base_serial: u64,
    #[clap(
        long,
        default_value = fs_batch::NAME_PREFIX,
        help = "Display name prefix"
    )]
    name_prefix: String,
    #[clap(
        long,
        default_value = fs_batch::DESCRIPTION_TEMPLATE,
        help = "Description template, the token label is appended"
    )]
    description: String,
    #[clap(
        long,
        default_value = fs_batch::IMAGE_BASE,
        help = "Base URI of the image assets"
    )]
    image_base: String,
    #[clap(
        short,
        long,
        default_value_t = fs_batch::MAX_IN_FLIGHT,
        help = "Upper bound on simultaneously in-flight writes"
    )]
    jobs: usize,
}

impl Generate {
    pub async fn run(&self) -> Result<(), AppError> {
        let config = GeneratorConfig {
            target_dir: self.target_dir.clone(),
            count: self.count,
            base_serial: self.base_serial,
            name_prefix: self.name_prefix.clone(),
            description_template: self.description.clone(),
            image_base: self.image_base.clone(),
            max_in_flight: self.jobs,
        };

        let report = generate(&config).await?;

        println!(
            "{} files written to {}",
            report.written.len(),
            self.target_dir.display()
        );
        for (index, err) in &report.failed {
            println!("{}.json failed: {}", index, err);
        }

        Ok(())
    }
}

use std::path::PathBuf;

use fs_batch::editor::{edit, EditorConfig, ErrorPolicy};

use crate::error::AppError;

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OnError {
    Stop,
    Continue,
}

impl From<OnError> for ErrorPolicy {
    fn from(policy: OnError) -> Self {
        match policy {
            OnError::Stop => ErrorPolicy::Stop,
            OnError::Continue => ErrorPolicy::Continue,
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
#[clap(
    name = "edit",
    about = "Rewrite the name, description and image fields of every JSON file in a folder"
)]
pub struct Edit {
    #[clap(
        value_parser,
        default_value = fs_batch::SOURCE_FOLDER,
        help = "Folder to scan"
    )]
    source_dir: PathBuf,
    #[clap(
        long,
        default_value = fs_batch::EDITED_NAME_PREFIX,
        help = "Prefix of the rewritten name field"
    )]
    name_prefix: String,
    #[clap(
        long,
        default_value = fs_batch::EDITED_DESCRIPTION,
        help = "Value written to the description field"
    )]
    description: String,
    #[clap(
        long,
        default_value = fs_batch::EDITED_IMAGE_PREFIX,
        help = "Prefix of the rewritten image field"
    )]
    image_prefix: String,
    #[clap(
        long,
        value_enum,
        default_value = "stop",
        help = "What to do when a single file fails"
    )]
    on_error: OnError,
}

impl Edit {
    pub fn run(&self) -> Result<(), AppError> {
        let config = EditorConfig {
            source_dir: self.source_dir.clone(),
            name_prefix: self.name_prefix.clone(),
            description: self.description.clone(),
            image_prefix: self.image_prefix.clone(),
            on_error: self.on_error.into(),
        };

        let report = edit(&config)?;

        println!(
            "{} files rewritten in {} ({} skipped)",
            report.edited.len(),
            self.source_dir.display(),
            report.skipped
        );
        for (path, err) in &report.failed {
            println!("{} failed: {}", path.display(), err);
        }
        println!("Done");

        Ok(())
    }
}

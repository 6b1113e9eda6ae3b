use std::fs;
use std::path::{Path, PathBuf};

use tokio::task::{JoinError, JoinSet};

use data_error::{CaratError, Result};
use data_metadata::TokenMetadata;
use fs_atomic_light::temp_and_swap;

/// Everything the generator pass needs to know; defaults carry the
/// constants of the K1 collection drop.
#[derive(Clone, Debug)]
pub struct GeneratorConfig {
    pub target_dir: PathBuf,
    pub count: usize,
    /// Offset added to the 1-based index to form the serial number.
    pub base_serial: u64,
    pub name_prefix: String,
    pub description_template: String,
    pub image_base: String,
    /// Upper bound on simultaneously in-flight file writes.
    pub max_in_flight: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(crate::TARGET_FOLDER),
            count: crate::TOKEN_COUNT,
            base_serial: crate::BASE_SERIAL,
            name_prefix: crate::NAME_PREFIX.to_owned(),
            description_template: crate::DESCRIPTION_TEMPLATE.to_owned(),
            image_base: crate::IMAGE_BASE.to_owned(),
            max_in_flight: crate::MAX_IN_FLIGHT,
        }
    }
}

impl GeneratorConfig {
    pub fn serial(&self, index: usize) -> u64 {
        self.base_serial + index as u64
    }

    /// Record content is a pure function of the index and this config,
    /// which is what makes reruns byte-for-byte idempotent.
    pub fn record(&self, index: usize) -> TokenMetadata {
        TokenMetadata::with_serial(
            self.serial(index),
            &self.name_prefix,
            &self.description_template,
            &self.image_base,
        )
    }
}

/// Per-index outcomes of one generator run.
///
/// A failed index does not abort its siblings; callers detect gaps
/// here and rerun for the missing indices.
#[derive(Debug, Default)]
pub struct GenerateReport {
    pub written: Vec<usize>,
    pub failed: Vec<(usize, CaratError)>,
}

/// Populate `config.target_dir` with `{index}.json` files for indices
/// `1..=count`.
///
/// The folder is created first, including missing parents; failure to
/// do so is fatal. File writes are dispatched as concurrent tasks,
/// at most `max_in_flight` of them running at once, and completion
/// order is unspecified.
pub async fn generate(config: &GeneratorConfig) -> Result<GenerateReport> {
    fs::create_dir_all(&config.target_dir)?;

    let mut tasks: JoinSet<(usize, Result<()>)> = JoinSet::new();
    let mut report = GenerateReport::default();
    let max_in_flight = config.max_in_flight.max(1);

    for index in 1..=config.count {
        while tasks.len() >= max_in_flight {
            if let Some(joined) = tasks.join_next().await {
                collect(joined, &mut report);
            }
        }

        let record = config.record(index);
        let target_dir = config.target_dir.clone();
        tasks.spawn(async move {
            (index, write_record(&record, &target_dir, index))
        });
    }

    while let Some(joined) = tasks.join_next().await {
        collect(joined, &mut report);
    }

    report.written.sort_unstable();
    report.failed.sort_by_key(|(index, _)| *index);

    log::info!(
        "{} metadata files written to {}",
        report.written.len(),
        config.target_dir.display()
    );
    Ok(report)
}

fn write_record(
    record: &TokenMetadata,
    target_dir: &Path,
    index: usize,
) -> Result<()> {
    let data = serde_json::to_string_pretty(record)?;
    temp_and_swap(
        data.as_bytes(),
        target_dir,
        &format!("{}.json", index),
    )
}

fn collect(
    joined: std::result::Result<(usize, Result<()>), JoinError>,
    report: &mut GenerateReport,
) {
    match joined {
        Ok((index, Ok(()))) => {
            log::info!("{}.json was created successfully", index);
            report.written.push(index);
        }
        Ok((index, Err(err))) => {
            log::error!("{}.json could not be written: {}", index, err);
            report.failed.push((index, err));
        }
        Err(err) => {
            log::error!("write task failed to complete: {}", err);
        }
    }
}

use std::fs;
use std::path::{Path, PathBuf};

use data_error::{CaratError, Result};
use data_metadata::TokenMetadata;
use fs_atomic_light::temp_and_swap;

/// What to do when a single file fails to read, parse or write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Abort the pass on the first failing file. Files sorting after it
    /// are left untouched; files already rewritten stay rewritten.
    Stop,
    /// Record the failure in the report and keep iterating.
    Continue,
}

#[derive(Clone, Debug)]
pub struct EditorConfig {
    pub source_dir: PathBuf,
    /// Prefix of the rewritten name field, `{prefix}/ #{stem}`.
    pub name_prefix: String,
    /// Written to the description field verbatim, prior content ignored.
    pub description: String,
    /// Prefix of the rewritten image field, `{prefix}{stem}.png`.
    pub image_prefix: String,
    pub on_error: ErrorPolicy,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(crate::SOURCE_FOLDER),
            name_prefix: crate::EDITED_NAME_PREFIX.to_owned(),
            description: crate::EDITED_DESCRIPTION.to_owned(),
            image_prefix: crate::EDITED_IMAGE_PREFIX.to_owned(),
            on_error: ErrorPolicy::Stop,
        }
    }
}

/// Outcomes of one editor run. `edited` holds the stems of rewritten
/// files in processing order; `failed` is only populated under
/// [`ErrorPolicy::Continue`].
#[derive(Debug, Default)]
pub struct EditReport {
    pub edited: Vec<String>,
    pub skipped: usize,
    pub failed: Vec<(PathBuf, CaratError)>,
}

/// Rewrite the name, description and image fields of every `.json`
/// file in `config.source_dir`.
///
/// The listing is snapshotted once before any file is touched and
/// sorted by path, so processing order is deterministic and entries
/// appearing mid-run are not seen. A missing or unreadable folder is
/// fatal before any per-file work. Entries whose extension is not
/// exactly `json` are skipped, never read.
pub fn edit(config: &EditorConfig) -> Result<EditReport> {
    let mut entries: Vec<PathBuf> = fs::read_dir(&config.source_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    entries.sort();

    let mut report = EditReport::default();

    for path in entries {
        if !is_metadata_file(&path) {
            log::debug!("skipping {}", path.display());
            report.skipped += 1;
            continue;
        }

        match rewrite(&path, config) {
            Ok(stem) => {
                log::info!("{} was rewritten", path.display());
                report.edited.push(stem);
            }
            Err(err) => match config.on_error {
                ErrorPolicy::Stop => return Err(err),
                ErrorPolicy::Continue => {
                    log::error!(
                        "{} could not be rewritten: {}",
                        path.display(),
                        err
                    );
                    report.failed.push((path, err));
                }
            },
        }
    }

    log::info!(
        "{} metadata files rewritten in {}",
        report.edited.len(),
        config.source_dir.display()
    );
    Ok(report)
}

fn is_metadata_file(path: &Path) -> bool {
    path.is_file()
        && path
            .extension()
            .map_or(false, |ext| ext == "json")
}

fn rewrite(path: &Path, config: &EditorConfig) -> Result<String> {
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            CaratError::Batch(
                "edit".to_owned(),
                format!("non-UTF-8 filename: {}", path.display()),
            )
        })?;
    let stem = filename
        .strip_suffix(".json")
        .unwrap_or(filename)
        .to_owned();

    let content = fs::read_to_string(path)?;
    let mut record: TokenMetadata = serde_json::from_str(&content)?;

    record.name = format!("{}/ #{}", config.name_prefix, stem);
    record.description = config.description.clone();
    record.image = format!("{}{}.png", config.image_prefix, stem);

    let data = serde_json::to_string_pretty(&record)?;
    temp_and_swap(data.as_bytes(), &config.source_dir, filename)?;

    Ok(stem)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    fn config_for(source_dir: &Path) -> EditorConfig {
        EditorConfig {
            source_dir: source_dir.to_path_buf(),
            ..EditorConfig::default()
        }
    }

    #[test]
    fn rewrites_the_three_fields_and_keeps_the_rest() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(
            temp_dir.path().join("42.json"),
            r#"{"name": "old", "edition": 3, "attributes": ["a"]}"#,
        )
        .unwrap();

        let report = edit(&config_for(temp_dir.path())).unwrap();
        assert_eq!(report.edited, vec!["42".to_owned()]);

        let record: TokenMetadata = serde_json::from_str(
            &fs::read_to_string(temp_dir.path().join("42.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(record.name, "Name/ #42");
        assert_eq!(record.description, "Description");
        assert_eq!(record.image, "image/42.png");
        assert_eq!(record.extra.get("edition"), Some(&serde_json::json!(3)));
        assert_eq!(
            record.extra.get("attributes"),
            Some(&serde_json::json!(["a"]))
        );
    }

    #[test]
    fn rewritten_output_is_round_trip_stable() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(
            temp_dir.path().join("7.json"),
            r#"{"name": "x", "edition": 1}"#,
        )
        .unwrap();

        edit(&config_for(temp_dir.path())).unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join("7.json")).unwrap();
        let record: TokenMetadata =
            serde_json::from_str(&content).unwrap();
        assert_eq!(serde_json::to_string_pretty(&record).unwrap(), content);
    }

    #[test]
    fn non_json_entries_are_left_untouched() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(temp_dir.path().join("notes.txt"), "scratch").unwrap();
        fs::write(temp_dir.path().join("1.json"), "{}").unwrap();

        let report = edit(&config_for(temp_dir.path())).unwrap();

        assert_eq!(report.edited, vec!["1".to_owned()]);
        assert_eq!(report.skipped, 1);
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("notes.txt")).unwrap(),
            "scratch"
        );
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(temp_dir.path().join("3.JSON"), "not even json").unwrap();

        let report = edit(&config_for(temp_dir.path())).unwrap();

        assert!(report.edited.is_empty());
        assert_eq!(report.skipped, 1);
    }

    #[test]
    fn stop_policy_aborts_before_later_files() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(temp_dir.path().join("5.json"), "{}").unwrap();
        fs::write(temp_dir.path().join("7.json"), "not json").unwrap();
        fs::write(temp_dir.path().join("9.json"), r#"{"name": "x"}"#)
            .unwrap();

        let result = edit(&config_for(temp_dir.path()));
        assert!(result.is_err());

        // 5.json sorts before the malformed file and was rewritten.
        let five: TokenMetadata = serde_json::from_str(
            &fs::read_to_string(temp_dir.path().join("5.json")).unwrap(),
        )
        .unwrap();
        assert_eq!(five.name, "Name/ #5");

        // 9.json sorts after it and must be untouched.
        assert_eq!(
            fs::read_to_string(temp_dir.path().join("9.json")).unwrap(),
            r#"{"name": "x"}"#
        );
    }

    #[test]
    fn continue_policy_records_the_failure_and_keeps_going() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(temp_dir.path().join("7.json"), "not json").unwrap();
        fs::write(temp_dir.path().join("9.json"), "{}").unwrap();

        let config = EditorConfig {
            on_error: ErrorPolicy::Continue,
            ..config_for(temp_dir.path())
        };
        let report = edit(&config).unwrap();

        assert_eq!(report.edited, vec!["9".to_owned()]);
        assert_eq!(report.failed.len(), 1);
        assert!(report.failed[0].0.ends_with("7.json"));
    }

    #[test]
    fn missing_folder_is_fatal() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        let config = config_for(&temp_dir.path().join("absent"));

        assert!(edit(&config).is_err());
    }

    #[test]
    fn empty_object_gains_the_three_fields() {
        let temp_dir = TempDir::new("tmp")
            .expect("Failed to create temporary directory");
        fs::write(temp_dir.path().join("12.json"), "{}").unwrap();

        edit(&config_for(temp_dir.path())).unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join("12.json")).unwrap();
        assert_eq!(
            content,
            r#"{
  "name": "Name/ #12",
  "description": "Description",
  "image": "image/12.png"
}"#
        );
    }
}

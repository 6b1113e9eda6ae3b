use data_error::Result;

use std::fs;
use std::path::Path;

/// Write data to a temporary file inside `dest_dir` and rename it
/// over `filename`.
///
/// The rename stays on one filesystem. A crash mid-write leaves at
/// most a stray dotfile, never a truncated destination.
pub fn temp_and_swap(
    data: &[u8],
    dest_dir: impl AsRef<Path>,
    filename: &str,
) -> Result<()> {
    let suffix: String = std::iter::repeat_with(fastrand::alphanumeric)
        .take(10)
        .collect();
    let tmp_path = dest_dir
        .as_ref()
        .join(format!(".{}.{}", filename, suffix));

    fs::write(&tmp_path, data)?;
    if let Err(err) =
        fs::rename(&tmp_path, dest_dir.as_ref().join(filename))
    {
        let _ = fs::remove_file(&tmp_path);
        return Err(err.into());
    }

    Ok(())
}

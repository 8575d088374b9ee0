//! Write one text file per core.
//!
//! Files are named after the input: `temps.txt` becomes `temps-core-1.txt`,
//! `temps-core-2.txt`, and so on.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::fit::ChannelFit;
use crate::report::render_channel;

/// Output path for `channel` (1-based).
///
/// The input's extension is replaced by `-core-N.txt`. Files go next to the
/// input unless `output_dir` is given.
pub fn output_path(input: &Path, channel: usize, output_dir: Option<&Path>) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let name = format!("{stem}-core-{channel}.txt");

    match output_dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Write the rendered least-squares and interpolation lines for one core.
pub fn write_channel_file(path: &Path, fit: &ChannelFit) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| {
            AppError::new(2, format!("Failed to create output '{}': {e}", path.display()))
        })?;

    file.write_all(render_channel(fit).as_bytes())
        .map_err(|e| {
            AppError::new(2, format!("Failed to write output '{}': {e}", path.display()))
        })?;

    Ok(())
}

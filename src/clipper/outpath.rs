//! Output path derivation.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_CLIP_EXTENSION, OUTPUT_SUFFIX};

/// Extension used for intermediate clips and the merged output.
///
/// Stream-copy extraction keeps the container of the source, so clips reuse
/// the input extension. Inputs without one fall back to
/// [`DEFAULT_CLIP_EXTENSION`].
pub fn clip_extension(input: &Path) -> String {
    input.extension().map_or_else(
        || DEFAULT_CLIP_EXTENSION.to_string(),
        |ext| ext.to_string_lossy().to_lowercase(),
    )
}

/// Derive the merged output path for an input file.
///
/// The filename is `<input_basename>_clip.<ext>` placed in `output_dir`,
/// with the basename lowercased and spaces replaced by underscores.
pub fn derive_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().map_or_else(
        || "output".to_string(),
        |stem| stem.to_string_lossy().to_lowercase().replace(' ', "_"),
    );

    output_dir.join(format!(
        "{stem}{OUTPUT_SUFFIX}.{}",
        clip_extension(input)
    ))
}

//! Input file handling and path utilities.

use std::path::{Path, PathBuf};

use retouch_core::decoders::is_supported_extension;

/// Output file name for `input`: `<stem><suffix>.<ext>`, keeping the input
/// extension so the output is encoded in the same format.
pub fn output_file_name(input: &Path, suffix: &str) -> Result<String, String> {
    let stem = input
        .file_stem()
        .ok_or_else(|| format!("Invalid input filename: {}", input.display()))?
        .to_string_lossy();

    Ok(match input.extension() {
        Some(ext) => format!("{}{}.{}", stem, suffix, ext.to_string_lossy()),
        None => format!("{}{}", stem, suffix),
    })
}

/// Determine the output path for a single-file run
///
/// # Arguments
/// * `input` - Input file path
/// * `out` - Optional output directory or file path
/// * `suffix` - Suffix appended to the stem when the name is derived
///
/// # Returns
/// `out` itself when it names a file, `out/<derived name>` when it is an
/// existing directory, and the derived name next to the input otherwise.
pub fn determine_output_path(
    input: &Path,
    out: Option<&Path>,
    suffix: &str,
) -> Result<PathBuf, String> {
    match out {
        Some(out_path) if out_path.is_dir() => Ok(out_path.join(output_file_name(input, suffix)?)),
        Some(out_path) => Ok(out_path.to_path_buf()),
        None => {
            let parent = input.parent().unwrap_or(Path::new("."));
            Ok(parent.join(output_file_name(input, suffix)?))
        }
    }
}

/// Output path for one file of a batch.
///
/// The file's location relative to `src_root` is mirrored under `dst_root`,
/// so recursive batches keep their directory layout.
pub fn batch_output_path(
    input: &Path,
    src_root: &Path,
    dst_root: &Path,
    suffix: &str,
) -> Result<PathBuf, String> {
    let relative_dir = input
        .parent()
        .and_then(|parent| parent.strip_prefix(src_root).ok())
        .unwrap_or(Path::new(""));

    Ok(dst_root
        .join(relative_dir)
        .join(output_file_name(input, suffix)?))
}

/// Collect the supported image files in `dir`, sorted.
///
/// Only files with a supported extension (case-insensitive) are returned.
/// If `recursive` is true, subdirectories are also scanned.
pub fn expand_inputs(dir: &Path, recursive: bool) -> Result<Vec<PathBuf>, String> {
    if !dir.is_dir() {
        return Err(format!("Not a directory: {}", dir.display()));
    }

    let mut files = Vec::new();
    collect_images_from_dir(dir, recursive, &mut files)?;

    // Sort for consistent ordering
    files.sort();
    Ok(files)
}

/// Recursively collect image files from a directory.
fn collect_images_from_dir(
    dir: &Path,
    recursive: bool,
    files: &mut Vec<PathBuf>,
) -> Result<(), String> {
    let entries = std::fs::read_dir(dir)
        .map_err(|e| format!("Failed to read directory {}: {}", dir.display(), e))?;

    for entry in entries {
        let entry = entry.map_err(|e| format!("Error reading directory entry: {}", e))?;
        let path = entry.path();

        if path.is_dir() && recursive {
            collect_images_from_dir(&path, recursive, files)?;
        } else if path.is_file() && is_supported_extension(&path) {
            files.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_output_file_name_keeps_extension() {
        let name = output_file_name(Path::new("/photos/beach.JPG"), " - edit").unwrap();
        assert_eq!(name, "beach - edit.JPG");
    }

    #[test]
    fn test_determine_output_path_next_to_input() {
        let path = determine_output_path(Path::new("shots/a.png"), None, " - edit").unwrap();
        assert_eq!(path, PathBuf::from("shots/a - edit.png"));
    }

    #[test]
    fn test_determine_output_path_into_directory() {
        let dir = tempdir().unwrap();

        let path = determine_output_path(Path::new("a.tif"), Some(dir.path()), "_x").unwrap();
        assert_eq!(path, dir.path().join("a_x.tif"));

        let explicit = dir.path().join("chosen.png");
        let path = determine_output_path(Path::new("a.tif"), Some(explicit.as_path()), "_x").unwrap();
        assert_eq!(path, explicit);
    }

    #[test]
    fn test_batch_output_path_mirrors_subdirectories() {
        let path = batch_output_path(
            Path::new("/in/2019/summer/p.jpg"),
            Path::new("/in"),
            Path::new("/out"),
            " - edit",
        )
        .unwrap();
        assert_eq!(path, PathBuf::from("/out/2019/summer/p - edit.jpg"));
    }

    #[test]
    fn test_expand_inputs_filters_and_recurses() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("nested");
        fs::create_dir(&nested).unwrap();
        for name in ["b.JPG", "a.png", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }
        fs::write(nested.join("c.tiff"), b"").unwrap();

        let flat = expand_inputs(dir.path(), false).unwrap();
        assert_eq!(flat, vec![dir.path().join("a.png"), dir.path().join("b.JPG")]);

        let deep = expand_inputs(dir.path(), true).unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep.contains(&nested.join("c.tiff")));
    }

    #[test]
    fn test_expand_inputs_rejects_missing_directory() {
        assert!(expand_inputs(Path::new("/nonexistent/dir"), false).is_err());
    }
}

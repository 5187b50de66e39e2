use std::path::{Path, PathBuf};

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Interpret a user-supplied manifest argument: a directory means the
/// manifest file inside it, anything else is used as-is.
pub fn manifest_path_arg(arg: &Path, manifest_file: &str) -> PathBuf {
    if arg.is_dir() {
        arg.join(manifest_file)
    } else {
        arg.to_path_buf()
    }
}

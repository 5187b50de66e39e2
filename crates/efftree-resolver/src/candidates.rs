//! Upward walk over the `node_modules` directories Node would search.

use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Conventional directory name where dependencies are installed.
pub const INSTALL_DIR: &str = "node_modules";

/// Returns the ordered `node_modules` directories to search for a package
/// located in `package_dir`, nearest first.
///
/// For `/a/node_modules/b/node_modules/c` the walk yields:
/// - `/a/node_modules/b/node_modules/c/node_modules`
/// - `/a/node_modules/b/node_modules`
/// - `/a/node_modules`
/// - `/node_modules`
///
/// Each call returns a fresh iterator, so the walk is restartable per lookup.
/// When the leading segment of an absolute path collapses to empty, the
/// top-level `/node_modules` candidate is yielded twice; consumers probe
/// sequentially and stop at the first hit, so the duplicate is redundant
/// work, not an error.
pub fn candidates(package_dir: &Path) -> Candidates {
    let segments: Vec<String> = package_dir
        .to_string_lossy()
        .split(MAIN_SEPARATOR)
        .map(str::to_string)
        .collect();
    Candidates {
        cut: Some(segments.len()),
        segments,
    }
}

/// Lazy, finite iterator over install-directory candidates.
#[derive(Debug, Clone)]
pub struct Candidates {
    segments: Vec<String>,
    /// Next truncation length, counting down to zero inclusive.
    cut: Option<usize>,
}

impl Iterator for Candidates {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let cut = self.cut?;
            self.cut = cut.checked_sub(1);

            // Never generate .../node_modules/node_modules/...
            if cut > 0 && self.segments[cut - 1] == INSTALL_DIR {
                continue;
            }

            // Joining skips empty segments, so the leading empty segment of
            // an absolute path is re-added via the separator root.
            let mut path = PathBuf::from(MAIN_SEPARATOR.to_string());
            for segment in &self.segments[..cut] {
                if !segment.is_empty() {
                    path.push(segment);
                }
            }
            path.push(INSTALL_DIR);
            return Some(path);
        }
    }
}

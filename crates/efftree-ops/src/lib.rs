pub mod ops_list;
pub mod ops_tree;

use std::path::PathBuf;

use efftree_core::manifest::MANIFEST_FILE;
use efftree_util::errors::EfftreeError;
use efftree_util::fs::{find_ancestor_with, manifest_path_arg};

/// Expand user-supplied root arguments into concrete manifest paths.
///
/// No arguments means the nearest `package.json` walking up from the current
/// directory. A directory argument means the `package.json` inside it.
pub fn root_manifests(roots: &[PathBuf]) -> miette::Result<Vec<PathBuf>> {
    if roots.is_empty() {
        let cwd = std::env::current_dir().map_err(EfftreeError::Io)?;
        let dir = find_ancestor_with(&cwd, MANIFEST_FILE).ok_or_else(|| {
            EfftreeError::Manifest {
                message: format!(
                    "No {MANIFEST_FILE} found in {} or any parent directory",
                    cwd.display()
                ),
            }
        })?;
        return Ok(vec![dir.join(MANIFEST_FILE)]);
    }
    Ok(roots
        .iter()
        .map(|root| manifest_path_arg(root, MANIFEST_FILE))
        .collect())
}

/// Resolve every root and print each tree with `render`. A root that fails
/// fatally is reported and counted without aborting its siblings.
fn print_resolved(
    roots: &[PathBuf],
    render: fn(&efftree_resolver::tree::EffectiveTree) -> String,
) -> miette::Result<()> {
    let manifests = root_manifests(roots)?;
    tracing::debug!("Resolving {} root manifest(s)", manifests.len());
    let mut diagnostics = efftree_util::diagnostics::ConsoleDiagnostics;
    let results = efftree_resolver::resolver::effective_trees(&manifests, &mut diagnostics);

    let mut failed = 0usize;
    for (path, result) in manifests.iter().zip(results) {
        match result {
            Ok(tree) => print!("{}", render(&tree)),
            Err(report) => {
                failed += 1;
                eprintln!("error: failed to resolve {}: {report}", path.display());
            }
        }
    }

    if failed > 0 {
        return Err(EfftreeError::Resolution {
            message: format!("{failed} of {} root manifest(s) failed", manifests.len()),
        }
        .into());
    }
    Ok(())
}

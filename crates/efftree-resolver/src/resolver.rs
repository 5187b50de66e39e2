//! Recursive, memoized effective-tree resolution with cycle detection.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use efftree_core::manifest::{DependencyKeys, PackageJson, MANIFEST_FILE};
use efftree_core::package::Package;
use efftree_util::diagnostics::Diagnostics;

use crate::candidates::candidates;
use crate::tree::{EffectiveTree, Node};

/// Memoized subtrees keyed by absolute manifest directory.
///
/// Only fully acyclic subtrees are ever stored, so a hit is always safe to
/// reuse. Entries are immutable once written; one cache may be shared across
/// several root resolutions.
pub type Cache = HashMap<PathBuf, Resolved>;

/// The outcome of resolving one package.
#[derive(Debug, Clone)]
pub struct Resolved {
    /// `name@version` of the resolved package.
    pub id: String,
    pub node: Node,
    /// False if this subtree contains a circular marker or dropped an
    /// unresolvable dependency; such subtrees must not be memoized.
    pub cacheable: bool,
}

/// Resolve the effective dependency tree for each root manifest, in input
/// order. One cache is shared across roots; each root gets a fresh ancestor
/// chain. A root whose manifest is missing or malformed fails alone without
/// affecting its siblings.
pub fn effective_trees(
    roots: &[PathBuf],
    diagnostics: &mut dyn Diagnostics,
) -> Vec<miette::Result<EffectiveTree>> {
    let mut cache = Cache::new();
    roots
        .iter()
        .map(|root| effective_tree(root, &mut cache, diagnostics))
        .collect()
}

/// Resolve the effective dependency tree for a single root manifest.
pub fn effective_tree(
    root_manifest: &Path,
    cache: &mut Cache,
    diagnostics: &mut dyn Diagnostics,
) -> miette::Result<EffectiveTree> {
    let manifest_path =
        std::path::absolute(root_manifest).map_err(efftree_util::errors::EfftreeError::Io)?;
    let manifest = PackageJson::from_path(&manifest_path)?;
    let manifest_dir = manifest_path
        .parent()
        .unwrap_or(Path::new("/"))
        .to_path_buf();

    let mut parents = Vec::new();
    let resolved = find_tree(
        &manifest,
        &manifest_dir,
        &mut parents,
        DependencyKeys::Root,
        cache,
        diagnostics,
    );
    Ok(EffectiveTree {
        id: resolved.id,
        root: resolved.node,
    })
}

/// Recursively resolve one package's dependencies into a subtree.
///
/// `parents` is the chain of `name@version` identities currently being
/// expanded; meeting one of them again terminates the branch with a
/// circular marker. The marker poisons cacheability all the way up, so a
/// package reached later through an independent path is re-resolved against
/// its own ancestor chain rather than served a cycle-shaped subtree.
pub fn find_tree(
    manifest: &PackageJson,
    manifest_dir: &Path,
    parents: &mut Vec<String>,
    keys: DependencyKeys,
    cache: &mut Cache,
    diagnostics: &mut dyn Diagnostics,
) -> Resolved {
    let id = manifest.id().to_string();

    if parents.iter().any(|parent| parent == &id) {
        tracing::debug!(
            "Package {id} at {} closes a dependency cycle",
            manifest_dir.display()
        );
        return Resolved {
            id,
            node: Node::Circular,
            cacheable: false,
        };
    }

    if let Some(hit) = cache.get(manifest_dir) {
        tracing::debug!(
            "Package {id} at {} was already resolved, returning subtree from cache",
            manifest_dir.display()
        );
        return hit.clone();
    }

    tracing::debug!("Finding dependencies for {id} at {}", manifest_dir.display());
    let mut children: BTreeMap<String, Node> = BTreeMap::new();
    let mut cacheable = true;

    parents.push(id.clone());
    for dependency in manifest.dependency_names(keys) {
        let Some(found) = find_package(&dependency, manifest_dir) else {
            diagnostics.warn(&format!(
                "Can't find a candidate for {dependency} in {}",
                manifest_dir.display()
            ));
            cacheable = false;
            continue;
        };

        let resolved = find_tree(
            &found.manifest,
            &found.dir,
            parents,
            DependencyKeys::Transitive,
            cache,
            diagnostics,
        );
        cacheable = cacheable && resolved.cacheable;
        children.insert(resolved.id, resolved.node);
    }
    parents.pop();

    let resolved = Resolved {
        id,
        node: Node::Branch(children),
        cacheable,
    };
    if cacheable {
        debug_assert!(!resolved.node.contains_circular());
        cache.insert(manifest_dir.to_path_buf(), resolved.clone());
    }
    resolved
}

/// Probe the candidate walk for the first directory that holds a parseable
/// manifest for `name`. A missing file and a malformed one are the same
/// outcome: reject the candidate and keep walking.
fn find_package(name: &str, from_dir: &Path) -> Option<Package> {
    for candidate in candidates(from_dir) {
        let dir = candidate.join(name);
        let manifest_path = dir.join(MANIFEST_FILE);
        tracing::debug!("  Trying {}", manifest_path.display());
        match PackageJson::from_path(&manifest_path) {
            Ok(manifest) => {
                tracing::debug!("  Found");
                return Some(Package { manifest, dir });
            }
            Err(_) => continue,
        }
    }
    None
}

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::package::PackageId;

/// Conventional file name of an npm package manifest.
pub const MANIFEST_FILE: &str = "package.json";

/// The parsed representation of a `package.json` file.
///
/// Only the fields the resolver consumes are modeled; everything else in the
/// file is ignored. Dependency map values are version-range strings that are
/// carried but never interpreted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackageJson {
    pub name: String,
    pub version: String,

    #[serde(default)]
    pub dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "devDependencies")]
    pub dev_dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "peerDependencies")]
    pub peer_dependencies: BTreeMap<String, String>,

    #[serde(default, rename = "peerDependenciesMeta")]
    pub peer_dependencies_meta: BTreeMap<String, PeerDependencyMeta>,
}

/// Per-peer-dependency metadata from `peerDependenciesMeta`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeerDependencyMeta {
    #[serde(default)]
    pub optional: bool,
}

/// Which dependency maps participate in a lookup.
///
/// `devDependencies` are installed only for the package you are working on,
/// so they count at the top level and nowhere below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKeys {
    /// `dependencies` + `devDependencies` + `peerDependencies`.
    Root,
    /// `dependencies` + `peerDependencies`.
    Transitive,
}

impl PackageJson {
    /// Load and parse a `package.json` file from the given path.
    pub fn from_path(path: &Path) -> miette::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            efftree_util::errors::EfftreeError::Manifest {
                message: format!("Failed to read {}: {e}", path.display()),
            }
        })?;
        Self::from_str(&content).map_err(|e| {
            efftree_util::errors::EfftreeError::Manifest {
                message: format!("Failed to parse {}: {e}", path.display()),
            }
            .into()
        })
    }

    /// Parse a `package.json` from a string.
    pub fn from_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The `name@version` identity of this package.
    pub fn id(&self) -> PackageId {
        PackageId {
            name: self.name.clone(),
            version: self.version.clone(),
        }
    }

    /// Collect the declared dependency names for the given key set.
    ///
    /// Names appearing under several keys are deduplicated (only presence
    /// matters). Peer dependencies marked optional in `peerDependenciesMeta`
    /// are excluded.
    pub fn dependency_names(&self, keys: DependencyKeys) -> BTreeSet<String> {
        let mut maps = vec![&self.dependencies];
        if keys == DependencyKeys::Root {
            maps.push(&self.dev_dependencies);
        }
        maps.push(&self.peer_dependencies);

        let mut names: BTreeSet<String> = BTreeSet::new();
        for map in maps {
            names.extend(map.keys().cloned());
        }
        names.retain(|name| !self.is_optional_peer(name));
        names
    }

    /// Whether `peerDependenciesMeta` marks this name as optional.
    pub fn is_optional_peer(&self, name: &str) -> bool {
        self.peer_dependencies_meta
            .get(name)
            .is_some_and(|meta| meta.optional)
    }
}

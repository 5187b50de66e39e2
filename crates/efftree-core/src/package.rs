use std::path::PathBuf;

use crate::manifest::PackageJson;

/// The `name@version` identity of a package.
///
/// Two manifests are the same package for cycle-detection purposes iff this
/// composite key matches.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageId {
    pub name: String,
    pub version: String,
}

impl PackageId {
    /// Parse `"name@version"` back into an identity.
    ///
    /// Splits on the last `@` so scoped names (`@scope/pkg@1.0.0`) survive.
    pub fn parse(s: &str) -> Option<Self> {
        let (name, version) = s.rsplit_once('@')?;
        if name.is_empty() || version.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

impl std::fmt::Display for PackageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}

/// A located package: one parsed `package.json` plus the directory holding it.
#[derive(Debug, Clone)]
pub struct Package {
    pub manifest: PackageJson,
    pub dir: PathBuf,
}

impl Package {
    /// Returns the package name from the manifest.
    pub fn name(&self) -> &str {
        &self.manifest.name
    }

    /// Returns the package version from the manifest.
    pub fn version(&self) -> &str {
        &self.manifest.version
    }

    /// Returns the `name@version` identity.
    pub fn id(&self) -> PackageId {
        self.manifest.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_roundtrip() {
        let id = PackageId {
            name: "lodash".to_string(),
            version: "4.17.21".to_string(),
        };
        assert_eq!(id.to_string(), "lodash@4.17.21");
        assert_eq!(PackageId::parse("lodash@4.17.21"), Some(id));
    }

    #[test]
    fn parse_scoped_name() {
        let id = PackageId::parse("@babel/core@7.23.0").unwrap();
        assert_eq!(id.name, "@babel/core");
        assert_eq!(id.version, "7.23.0");
    }

    #[test]
    fn parse_rejects_missing_version() {
        assert!(PackageId::parse("lodash").is_none());
        assert!(PackageId::parse("lodash@").is_none());
    }
}

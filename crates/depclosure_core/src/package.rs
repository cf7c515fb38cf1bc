use log::{debug, trace};
use path_clean::clean;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::constants::PACKAGE_DESCRIPTOR;

/// The part of a `package.json` that resolution cares about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageDescriptor {
    #[serde(default)]
    pub main: String,
}

impl PackageDescriptor {
    /// Reads `dir/package.json`.
    ///
    /// Returns `None` only when the descriptor is absent. An unreadable or
    /// malformed descriptor yields an empty `main`.
    pub fn read(dir: &Path) -> Option<Self> {
        let path = dir.join(PACKAGE_DESCRIPTOR);
        if !path.is_file() {
            trace!("No package descriptor at {}", path.display());
            return None;
        }

        let descriptor = match fs::read_to_string(&path) {
            Ok(txt) => serde_json::from_str(&txt).unwrap_or_else(|e| {
                debug!("Malformed package descriptor {}: {}", path.display(), e);
                Self::default()
            }),
            Err(e) => {
                debug!("Failed to read package descriptor {}: {}", path.display(), e);
                Self::default()
            }
        };
        trace!("Package descriptor {} has main '{}'", path.display(), descriptor.main);
        Some(descriptor)
    }

    /// The path `main` designates inside `dir`. A rooted `main` stays inside `dir`.
    pub fn entry_point(&self, dir: &Path) -> PathBuf {
        clean(dir.join(self.main.trim_start_matches('/')))
    }
}

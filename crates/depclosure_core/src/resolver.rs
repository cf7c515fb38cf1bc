use anyhow::{Context, Result};
use log::{debug, trace};
use path_clean::clean;
use std::{
    env,
    path::{Path, PathBuf},
};

use crate::{
    constants::{
        INDEX_FILES, JSON_EXTENSION, MODULES_DIR, NATIVE_ADDON_EXTENSION, SCRIPT_EXTENSIONS,
    },
    package::PackageDescriptor,
    types::{SpecKind, Specifier},
};

/// Resolves specifiers to files on disk.
///
/// Bare specifiers are looked up in a single `node_modules` directory under
/// `cwd`. Ancestor directories are never searched.
#[derive(Debug, Clone)]
pub struct Resolver {
    cwd: PathBuf,
}

impl Resolver {
    /// Anchors bare-specifier lookup at the process working directory.
    pub fn from_current_dir() -> Result<Self> {
        let cwd = env::current_dir().context("Failed to read the current working directory")?;
        Ok(Self::with_cwd(cwd))
    }

    pub fn with_cwd(cwd: impl Into<PathBuf>) -> Self {
        Resolver { cwd: clean(cwd.into()) }
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Resolves `request` as written in a file living in `base_dir`.
    ///
    /// `extensions` are probed in order after the exact path. Returns `None`
    /// when nothing on disk matches.
    pub fn resolve(&self, request: &str, base_dir: &Path, extensions: &[&str]) -> Option<PathBuf> {
        let spec = Specifier::parse(request);
        trace!("Resolving {:?} '{}' from {}", spec.kind, request, base_dir.display());

        let resolved = match spec.kind {
            SpecKind::Absolute => resolve_path(&clean(request), extensions),
            SpecKind::Relative => resolve_path(&clean(base_dir.join(request)), extensions),
            SpecKind::Bare => self.resolve_module(request),
        };

        match &resolved {
            Some(path) => debug!("Resolved '{}' to {}", request, path.display()),
            None => trace!("Failed to resolve '{}' from {}", request, base_dir.display()),
        }
        resolved
    }

    fn resolve_module(&self, request: &str) -> Option<PathBuf> {
        if request.is_empty() {
            return None;
        }
        let module = clean(self.cwd.join(MODULES_DIR).join(request));
        trace!("Looking for module '{}' at {}", request, module.display());
        resolve_path(&module, SCRIPT_EXTENSIONS)
    }
}

/// Loads `path` as a file, then as a directory.
pub fn resolve_path(path: &Path, extensions: &[&str]) -> Option<PathBuf> {
    resolve_as_file(path, extensions).or_else(|| resolve_as_dir(path, extensions))
}

fn resolve_as_file(path: &Path, extensions: &[&str]) -> Option<PathBuf> {
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    extensions
        .iter()
        .chain([&JSON_EXTENSION, &NATIVE_ADDON_EXTENSION])
        .map(|ext| with_suffix(path, ext))
        .find(|candidate| {
            trace!("Probing {}", candidate.display());
            candidate.is_file()
        })
}

fn resolve_as_index(dir: &Path) -> Option<PathBuf> {
    INDEX_FILES.iter().map(|index| dir.join(index)).find(|candidate| candidate.is_file())
}

fn resolve_as_dir(dir: &Path, extensions: &[&str]) -> Option<PathBuf> {
    match PackageDescriptor::read(dir) {
        Some(descriptor) => {
            let main = descriptor.entry_point(dir);
            trace!("Package {} points at {}", dir.display(), main.display());
            resolve_as_file(&main, extensions).or_else(|| resolve_as_index(&main))
        }
        None => resolve_as_index(dir),
    }
}

/// Appends `suffix` to the final component, `foo` + `.d.ts` -> `foo.d.ts`.
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(suffix);
    PathBuf::from(s)
}

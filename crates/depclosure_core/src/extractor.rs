use anyhow::{Context, Result};
use log::{debug, trace};
use path_clean::clean;
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    dialect::Dialect,
    resolver::{Resolver, resolve_path},
};

/// Reads `file` and returns the files it depends on, in source order.
///
/// Unresolvable specifiers are dropped. The result may contain duplicates.
pub fn extract_dependencies(resolver: &Resolver, file: &Path) -> Result<Vec<PathBuf>> {
    trace!("Reading file for dependencies: {}", file.display());
    let bytes = fs::read(file).with_context(|| format!("Failed to read {}", file.display()))?;
    Ok(dependencies_in(resolver, file, &String::from_utf8_lossy(&bytes)))
}

/// Like [`extract_dependencies`], for a `file` whose contents are already in memory.
pub fn dependencies_in(resolver: &Resolver, file: &Path, source: &str) -> Vec<PathBuf> {
    let dir = file.parent().unwrap_or_else(|| Path::new(""));
    let dialect = Dialect::for_path(file);

    let deps: Vec<PathBuf> = match dialect {
        // Every stylesheet import is anchored to the importing directory, bare or not.
        Dialect::Stylesheet => Dialect::Stylesheet
            .specifiers(source)
            .iter()
            .filter_map(|path| resolve_path(&clean(dir.join(path)), dialect.extensions()))
            .collect(),
        Dialect::TypedScript => {
            let mut deps =
                resolve_all(resolver, dir, &Dialect::Script.specifiers(source), dialect);
            deps.extend(resolve_all(resolver, dir, &dialect.specifiers(source), dialect));
            deps
        }
        Dialect::Script => resolve_all(resolver, dir, &dialect.specifiers(source), dialect),
    };

    debug!("Found {} {:?} dependencies in {}", deps.len(), dialect, file.display());
    deps
}

fn resolve_all(
    resolver: &Resolver,
    dir: &Path,
    specs: &[String],
    dialect: Dialect,
) -> Vec<PathBuf> {
    specs.iter().filter_map(|spec| resolver.resolve(spec, dir, dialect.extensions())).collect()
}

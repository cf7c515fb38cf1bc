use anyhow::Result;
use depclosure_core::Resolver;
use log::{debug, info};

use crate::{closure::build_closure, config::Config, types::ClosureResult};

pub fn run_closure(mut cfg: Config) -> Result<ClosureResult> {
    info!("Starting dependency closure for {} entries", cfg.entries.len());

    cfg.initialize()?;
    let resolver = Resolver::with_cwd(cfg.cwd()?);
    debug!("Resolving bare specifiers under {}", resolver.cwd().display());

    let closure = build_closure(&resolver, &cfg.entries);
    info!(
        "Dependency closure complete. Found {} files ({} queued paths dropped)",
        closure.files.len(),
        closure.dropped
    );

    Ok(ClosureResult { files: closure.files, entries: cfg.entries.len(), dropped: closure.dropped })
}

use depclosure_core::{Resolver, extract_dependencies};
use log::{debug, trace};
use path_clean::clean;
use std::path::PathBuf;

use crate::{queue::PendingQueue, types::Closure};

/// Breadth-first walk from `entries`, expanding every file that exists.
///
/// Entries are taken as given (made absolute against the resolver's working
/// directory and cleaned). A queued path that is not a regular file is
/// dropped without error. Output is discovery order, not build order.
pub fn build_closure(resolver: &Resolver, entries: &[PathBuf]) -> Closure {
    let mut pending = PendingQueue::new();
    for entry in entries {
        let path = clean(resolver.cwd().join(entry));
        if !pending.push(path) {
            trace!("Entry {} given more than once", entry.display());
        }
    }
    debug!("Starting traversal from {} entries", pending.len());

    let mut closure = Closure::default();

    while let Some(file) = pending.pop() {
        if !file.is_file() {
            debug!("Dropping {}: not a regular file", file.display());
            closure.dropped += 1;
            continue;
        }

        trace!("Expanding {}", file.display());
        let deps = match extract_dependencies(resolver, &file) {
            Ok(deps) => deps,
            Err(e) => {
                debug!("No dependencies for {}: {:#}", file.display(), e);
                Vec::new()
            }
        };
        closure.files.push(file);

        for dep in deps {
            if pending.has_seen(&dep) {
                trace!("Already seen: {}", dep.display());
                continue;
            }
            trace!("Queueing {}", dep.display());
            pending.push(dep);
        }
    }

    debug!(
        "Traversal finished: {} files, {} dropped",
        closure.files.len(),
        closure.dropped
    );
    closure
}

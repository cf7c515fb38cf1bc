//! Transitive dependency closure for stylesheet, typed-script and script files.
//!
//! Starting from one or more entry files, this crate walks every dependency the
//! entries reach (breadth first) and returns the files in discovery order.
//!
//! # Examples
//!
//! ```no_run
//! use depclosure_walk::{Config, run_closure};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config { entries: vec!["src/main.ts".into()], cwd: None };
//!
//! let result = run_closure(cfg)?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! depclosure_walk::print_files(&mut stdout, &result.files)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod closure;
mod config;
mod queue;
mod reporter;
mod types;
mod walker;

// Re-export public API
pub use closure::build_closure;
pub use config::Config;
pub use queue::PendingQueue;
pub use reporter::print_files;
pub use types::{Closure, ClosureResult};
pub use walker::run_closure;

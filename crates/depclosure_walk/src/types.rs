use std::path::PathBuf;

/// Output of a single breadth-first traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Closure {
    /// Every reachable file, in discovery order, each exactly once
    pub files: Vec<PathBuf>,
    /// Queued paths skipped because they were not regular files
    pub dropped: usize,
}

#[derive(Debug, Clone)]
pub struct ClosureResult {
    pub files: Vec<PathBuf>,
    pub entries: usize,
    pub dropped: usize,
}

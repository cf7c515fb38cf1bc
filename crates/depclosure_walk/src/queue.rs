use std::{
    collections::{HashSet, VecDeque},
    path::{Path, PathBuf},
};

/// FIFO of files waiting to be expanded.
///
/// Remembers every path it has ever admitted, so a path that was popped
/// (accepted or dropped) can never be queued again.
#[derive(Debug, Default)]
pub struct PendingQueue {
    pending: VecDeque<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl PendingQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `path` unless it was admitted before. Returns whether it was queued.
    pub fn push(&mut self, path: PathBuf) -> bool {
        if self.seen.contains(&path) {
            return false;
        }
        self.seen.insert(path.clone());
        self.pending.push_back(path);
        true
    }

    pub fn pop(&mut self) -> Option<PathBuf> {
        self.pending.pop_front()
    }

    pub fn has_seen(&self, path: &Path) -> bool {
        self.seen.contains(path)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_order() {
        let mut queue = PendingQueue::new();
        assert!(queue.push(PathBuf::from("/a")));
        assert!(queue.push(PathBuf::from("/b")));
        assert!(queue.push(PathBuf::from("/c")));
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(PathBuf::from("/a")));
        assert_eq!(queue.pop(), Some(PathBuf::from("/b")));
        assert_eq!(queue.pop(), Some(PathBuf::from("/c")));
        assert_eq!(queue.pop(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_rejects_pending_duplicate() {
        let mut queue = PendingQueue::new();
        assert!(queue.push(PathBuf::from("/a")));
        assert!(!queue.push(PathBuf::from("/a")));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_never_requeues_popped_path() {
        let mut queue = PendingQueue::new();
        queue.push(PathBuf::from("/a"));
        assert_eq!(queue.pop(), Some(PathBuf::from("/a")));
        assert!(!queue.push(PathBuf::from("/a")));
        assert!(queue.is_empty());
        assert!(queue.has_seen(Path::new("/a")));
        assert!(!queue.has_seen(Path::new("/b")));
    }
}

//! Rolling log of revealed step descriptions

use std::collections::VecDeque;

/// One revealed step as it appears in the log panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    /// 1-based step index
    pub index: usize,
    pub kind: &'static str,
    pub description: String,
}

/// Bounded FIFO of the most recent [`LogEntry`]s
///
/// Pushing past the capacity evicts the oldest entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaybackLog {
    entries: VecDeque<LogEntry>,
    capacity: usize,
}

impl PlaybackLog {
    pub fn new(capacity: usize) -> Self {
        PlaybackLog {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, entry: LogEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Oldest first
    pub fn entries(&self) -> impl DoubleEndedIterator<Item = &LogEntry> + '_ {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&LogEntry> {
        self.entries.back()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize) -> LogEntry {
        LogEntry {
            index,
            kind: "step",
            description: format!("step {}", index),
        }
    }

    #[test]
    fn test_oldest_entries_are_evicted() {
        let mut log = PlaybackLog::new(3);
        for i in 1..=5 {
            log.push(entry(i));
        }

        let indices: Vec<usize> = log.entries().map(|e| e.index).collect();
        assert_eq!(indices, vec![3, 4, 5]);
        assert_eq!(log.latest().unwrap().description, "step 5");
        assert_eq!(log.capacity(), 3);
    }

    #[test]
    fn test_clear() {
        let mut log = PlaybackLog::new(2);
        log.push(entry(1));
        log.clear();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }
}

//! FIFO frontier queue of pending URLs
//!
//! The frontier holds raw URL strings in discovery order. It performs no
//! deduplication: duplicate enqueues are tolerated and filtered later by the
//! visited registry, after dequeue. Each operation takes the internal lock
//! for its own duration only, so the queue is safe to share between workers.

use std::collections::VecDeque;
use std::sync::Mutex;

/// Thread-safe FIFO queue of URLs awaiting a fetch
#[derive(Debug, Default)]
pub struct Frontier {
    elements: Mutex<VecDeque<String>>,
}

impl Frontier {
    /// Creates an empty frontier
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a URL at the tail of the queue
    pub fn enqueue(&self, url: impl Into<String>) {
        let mut elements = self.elements.lock().unwrap();
        elements.push_back(url.into());
    }

    /// Removes and returns the URL at the head of the queue
    ///
    /// Returns `None` when the queue is empty. Never blocks waiting for an
    /// element to arrive.
    pub fn dequeue(&self) -> Option<String> {
        let mut elements = self.elements.lock().unwrap();
        elements.pop_front()
    }

    /// Current element count
    ///
    /// Informational only: under concurrent mutation the count may be stale
    /// by the time the caller acts on it.
    pub fn len(&self) -> usize {
        self.elements.lock().unwrap().len()
    }

    /// Returns whether the queue is currently empty
    pub fn is_empty(&self) -> bool {
        self.elements.lock().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_dequeue_empty_returns_none() {
        let frontier = Frontier::new();
        assert_eq!(frontier.dequeue(), None);
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_fifo_order() {
        let frontier = Frontier::new();
        frontier.enqueue("https://a.test/");
        frontier.enqueue("https://b.test/");
        frontier.enqueue("https://c.test/");

        assert_eq!(frontier.dequeue().as_deref(), Some("https://a.test/"));
        assert_eq!(frontier.dequeue().as_deref(), Some("https://b.test/"));
        assert_eq!(frontier.dequeue().as_deref(), Some("https://c.test/"));
        assert_eq!(frontier.dequeue(), None);
    }

    #[test]
    fn test_interleaved_enqueue_dequeue_keeps_order() {
        let frontier = Frontier::new();
        frontier.enqueue("a");
        frontier.enqueue("b");
        assert_eq!(frontier.dequeue().as_deref(), Some("a"));
        frontier.enqueue("c");
        assert_eq!(frontier.dequeue().as_deref(), Some("b"));
        assert_eq!(frontier.dequeue().as_deref(), Some("c"));
    }

    #[test]
    fn test_duplicates_are_not_suppressed() {
        let frontier = Frontier::new();
        frontier.enqueue("https://a.test/");
        frontier.enqueue("https://a.test/");
        assert_eq!(frontier.len(), 2);
    }

    #[test]
    fn test_len_tracks_mutation() {
        let frontier = Frontier::new();
        assert_eq!(frontier.len(), 0);
        frontier.enqueue("a");
        assert_eq!(frontier.len(), 1);
        frontier.dequeue();
        assert_eq!(frontier.len(), 0);
    }

    #[test]
    fn test_concurrent_enqueue_loses_nothing() {
        let frontier = Arc::new(Frontier::new());
        let mut handles = Vec::new();

        for t in 0..4 {
            let frontier = Arc::clone(&frontier);
            handles.push(std::thread::spawn(move || {
                for i in 0..100 {
                    frontier.enqueue(format!("https://t{}.test/{}", t, i));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(frontier.len(), 400);
    }
}

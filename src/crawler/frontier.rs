//! Crawl frontier with visited tracking and admission control
//!
//! The frontier owns both the FIFO of pending URLs and the visited set of one
//! crawl. Admission is checked when a URL is enqueued, not only when it is
//! dequeued, so `visited + queued` never exceeds the page cap no matter how
//! many links a single page fans out to.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// Breadth-first frontier for a single crawl run
#[derive(Debug)]
pub struct Frontier {
    /// URLs waiting to be fetched, in discovery order
    queue: VecDeque<Url>,

    /// Mirror of `queue` for constant-time membership checks
    queued: HashSet<String>,

    /// URLs already handed out for fetching
    visited: HashSet<String>,

    /// Page cap for the run
    max_pages: usize,
}

impl Frontier {
    /// Creates a frontier seeded with the start URL
    ///
    /// With a cap of zero nothing is seeded and the crawl is empty.
    pub fn new(start: Url, max_pages: usize) -> Self {
        let mut frontier = Self {
            queue: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::new(),
            max_pages,
        };
        frontier.admit(start);
        frontier
    }

    /// Takes the next URL to fetch and marks it visited
    ///
    /// Returns None once the frontier is exhausted or the visited count has
    /// reached the cap.
    pub fn next_url(&mut self) -> Option<Url> {
        while self.visited.len() < self.max_pages {
            let url = self.queue.pop_front()?;
            self.queued.remove(url.as_str());

            if self.visited.insert(url.as_str().to_string()) {
                return Some(url);
            }
        }
        None
    }

    /// Enqueues a URL if it is new and the cap leaves room
    ///
    /// Returns true if the URL was added.
    pub fn admit(&mut self, url: Url) -> bool {
        let key = url.as_str();
        if self.visited.contains(key) || self.queued.contains(key) {
            return false;
        }

        if self.visited.len() + self.queue.len() >= self.max_pages {
            tracing::trace!("Frontier full, dropping {}", key);
            return false;
        }

        self.queued.insert(key.to_string());
        self.queue.push_back(url);
        true
    }

    /// Number of URLs handed out so far
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Number of URLs waiting
    pub fn queued_count(&self) -> usize {
        self.queue.len()
    }
}

//! Query Cache
//!
//! Last-good results keyed by the full request key, plus the set of keys
//! currently in flight so identical concurrent requests are issued once.

use std::collections::{HashMap, HashSet, VecDeque};

const DEFAULT_CAPACITY: usize = 32;

#[derive(Debug, Clone)]
pub struct QueryCache<T> {
    entries: HashMap<String, T>,
    order: VecDeque<String>,
    in_flight: HashSet<String>,
    capacity: usize,
}

impl<T: Clone> Default for QueryCache<T> {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl<T: Clone> QueryCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            in_flight: HashSet::new(),
            capacity: capacity.max(1),
        }
    }

    /// Last successful result for `key`
    pub fn cached(&self, key: &str) -> Option<T> {
        self.entries.get(key).cloned()
    }

    /// Mark `key` in flight; false if an identical request already is
    pub fn begin(&mut self, key: &str) -> bool {
        self.in_flight.insert(key.to_string())
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.in_flight.contains(key)
    }

    /// Store a successful result, evicting the oldest entry past capacity
    pub fn finish(&mut self, key: &str, value: T) {
        self.in_flight.remove(key);
        if self.entries.insert(key.to_string(), value).is_none() {
            self.order.push_back(key.to_string());
        }
        while self.order.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }

    /// Request failed; the previous good entry (if any) is kept
    pub fn fail(&mut self, key: &str) {
        self.in_flight.remove(key);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

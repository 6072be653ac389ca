use std::{
    collections::{HashMap, VecDeque},
    sync::Arc,
};

use tokio::sync::RwLock;
use tracing::trace;

/// Shared memo of previously checked guesses.
///
/// Size-bounded: once `capacity` entries are live, inserting another evicts
/// the oldest insertion. Reads never refresh an entry; a guess's verdict
/// does not change, so recency has nothing to add. A capacity of zero turns
/// the memo off entirely.
///
/// Cloning is cheap and every clone shares the same map.
#[derive(Debug, Clone)]
pub struct CheckCache(Arc<RwLock<Inner>>);

#[derive(Debug)]
struct Inner {
    results: HashMap<String, bool>,
    order: VecDeque<String>,
    capacity: usize,
}

impl CheckCache {
    pub fn new(capacity: usize) -> Self {
        Self(Arc::new(RwLock::new(Inner {
            results: HashMap::new(),
            order: VecDeque::new(),
            capacity,
        })))
    }

    pub async fn get(&self, guess: &str) -> Option<bool> {
        self.0.read().await.results.get(guess).copied()
    }

    pub async fn put(&self, guess: &str, valid: bool) {
        let mut inner = self.0.write().await;

        if inner.capacity == 0 {
            return;
        }

        if inner.results.insert(guess.to_owned(), valid).is_none() {
            inner.order.push_back(guess.to_owned());

            if inner.order.len() > inner.capacity {
                if let Some(oldest) = inner.order.pop_front() {
                    trace!(guess = oldest, "evicting oldest memo entry");
                    inner.results.remove(&oldest);
                }
            }
        }
    }

    pub async fn len(&self) -> usize {
        self.0.read().await.results.len()
    }
}

use std::time::{Duration, Instant};

/// Single-slot cache whose value expires a fixed interval after it was stored.
#[derive(Debug)]
pub struct TtlCache<V> {
    ttl: Duration,
    entry: Option<(V, Instant)>,
}

impl<V> TtlCache<V> {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entry: None }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn get(&self) -> Option<&V> {
        self.get_at(Instant::now())
    }

    /// The cached value, if it was stored less than `ttl` before `now`.
    pub fn get_at(&self, now: Instant) -> Option<&V> {
        match &self.entry {
            Some((value, fetched_at)) if now.saturating_duration_since(*fetched_at) < self.ttl => {
                Some(value)
            }
            _ => None,
        }
    }

    pub fn insert(&mut self, value: V) -> &V {
        self.insert_at(value, Instant::now())
    }

    pub fn insert_at(&mut self, value: V, now: Instant) -> &V {
        &self.entry.insert((value, now)).0
    }
}

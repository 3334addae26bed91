use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;
use std::ops::Add;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::Serialize;

use dashmap::DashMap;

pub trait RequestKind {
    type R<'a>;
}

/// Decides which bucket a request falls into and what that bucket allows
pub trait RatelimitResolver<R>: Send + Sync {
    fn resolve_bucket<'a>(&self, request: &'a R) -> (&'a str, Option<&'a str>);
    fn resolve_bucket_limit(&self, bucket: &str) -> Limit;
}

/// Allowance for a bucket over a fixed window
#[derive(Clone, Copy, Debug)]
pub struct Limit {
    pub count: u32,
    pub window: Duration,
}

impl Limit {
    /// Allowance over a ten second window
    pub const fn per_10s(count: u32) -> Limit {
        Limit {
            count,
            window: Duration::from_secs(10),
        }
    }
}

#[derive(Clone)]
pub struct RatelimitStorage<K: RequestKind> {
    pub resolver: Arc<dyn for<'a> RatelimitResolver<K::R<'a>>>,
    pub map: Arc<DashMap<u64, Bucket>>,
}

impl<K: RequestKind> RatelimitStorage<K> {
    pub fn new<R: for<'a> RatelimitResolver<K::R<'a>> + 'static>(resolver: R) -> Self {
        Self {
            resolver: Arc::new(resolver),
            map: Arc::new(DashMap::new()),
        }
    }
}

/// Usage of a bucket within the current window
#[derive(Clone, Copy, Debug)]
pub struct Bucket {
    used: u32,
    reset: u128,
}

/// Get the current time from Unix Epoch as a Duration
fn now() -> Duration {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards...")
}

impl Bucket {
    /// Find bucket by its key
    pub fn from(map: &DashMap<u64, Bucket>, key: u64, limit: Limit) -> Bucket {
        map.get(&key).map(|x| *x).unwrap_or_else(|| Bucket {
            used: 0,
            reset: now().add(limit.window).as_millis(),
        })
    }

    /// Deduct one unit from the bucket and save
    pub fn deduct(&mut self, limit: Limit) {
        let current_time = now().as_millis();
        if current_time > self.reset {
            self.used = 1;
            self.reset = now().add(limit.window).as_millis();
        } else {
            self.used += 1;
        }
    }

    /// Save information
    pub fn save(self, map: &DashMap<u64, Bucket>, key: u64) {
        map.insert(key, self);
    }

    /// Get remaining units in the bucket
    pub fn get_remaining(&self, limit: Limit) -> u32 {
        if now().as_millis() > self.reset {
            limit.count
        } else {
            limit.count - self.used
        }
    }

    /// Get how long bucket has until reset
    pub fn left_until_reset(&self) -> u128 {
        let current_time = now().as_millis();
        self.reset.saturating_sub(current_time)
    }
}

/// Ratelimit Guard
#[derive(Serialize, Clone, Copy, Debug)]
pub struct Ratelimiter {
    pub key: u64,
    pub limit: u32,
    pub remaining: u32,
    pub reset: u128,
}

impl Ratelimiter {
    /// Generate guard from identifier and target bucket
    pub fn from(
        map: &DashMap<u64, Bucket>,
        identifier: &str,
        limit: Limit,
        (bucket, resource): (&str, Option<&str>),
    ) -> Result<Ratelimiter, Ratelimiter> {
        let mut key = DefaultHasher::new();
        key.write(identifier.as_bytes());
        key.write(bucket.as_bytes());

        if let Some(id) = resource {
            key.write(id.as_bytes());
        }

        let key = key.finish();
        let mut entry = Bucket::from(map, key, limit);

        let remaining = entry.get_remaining(limit);
        let reset = entry.left_until_reset();
        let mut ratelimiter = Ratelimiter {
            key,
            limit: limit.count,
            remaining,
            reset,
        };

        if remaining == 0 {
            return Err(ratelimiter);
        }

        entry.deduct(limit);
        entry.save(map, key);
        ratelimiter.remaining -= 1;
        ratelimiter.reset = entry.left_until_reset();

        Ok(ratelimiter)
    }
}

#[derive(Serialize)]
#[serde(untagged)]
pub enum RatelimitInformation {
    Success(Ratelimiter),
    Failure { retry_after: u128 },
}

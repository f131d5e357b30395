#[cfg(test)]
pub mod fixtures {
    use std::collections::HashMap;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};
    use std::io;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use async_trait::async_trait;

    use crate::error::{AppError, Result};
    use crate::models::ScanHit;
    use crate::services::{Fetcher, HitReporter};

    /// Body carrying two distinct matches.
    pub const BOUNTY_BODY: &str = "Our bugbounty@test.com offers reward";
    /// Body with no matches at all.
    pub const NOISE_BODY: &str = "Opening hours: nine to five";

    /// In-memory fetcher. Unknown URLs fail like a timed-out request.
    #[derive(Debug, Default)]
    pub struct MockFetcher {
        bodies: HashMap<String, String>,
        jitter: Option<(u64, u64)>,
        calls: Mutex<Vec<String>>,
        in_flight: AtomicUsize,
        max_in_flight: AtomicUsize,
    }

    impl MockFetcher {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_body(mut self, url: &str, body: &str) -> Self {
            self.bodies.insert(url.to_string(), body.to_string());
            self
        }

        /// Delay every fetch by a pseudo-random 1..=max_ms derived from `seed` and the URL.
        pub fn with_jitter(mut self, seed: u64, max_ms: u64) -> Self {
            self.jitter = Some((seed, max_ms.max(1)));
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub fn max_in_flight(&self) -> usize {
            self.max_in_flight.load(Ordering::SeqCst)
        }

        fn delay_for(&self, url: &str) -> Option<Duration> {
            let (seed, max_ms) = self.jitter?;
            let mut hasher = DefaultHasher::new();
            (seed, url).hash(&mut hasher);
            Some(Duration::from_millis(hasher.finish() % max_ms + 1))
        }
    }

    #[async_trait]
    impl Fetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<String> {
            let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
            self.max_in_flight.fetch_max(now, Ordering::SeqCst);

            if let Some(delay) = self.delay_for(url) {
                tokio::time::sleep(delay).await;
            }
            self.calls.lock().unwrap().push(url.to_string());
            self.in_flight.fetch_sub(1, Ordering::SeqCst);

            self.bodies.get(url).cloned().ok_or_else(|| {
                AppError::Io(io::Error::new(io::ErrorKind::TimedOut, "request timed out"))
            })
        }
    }

    /// Reporter that keeps every hit in arrival order.
    #[derive(Debug, Default)]
    pub struct CollectingReporter {
        hits: Mutex<Vec<ScanHit>>,
    }

    impl CollectingReporter {
        pub fn hits(&self) -> Vec<ScanHit> {
            self.hits.lock().unwrap().clone()
        }

        pub fn urls(&self) -> Vec<String> {
            self.hits().into_iter().map(|h| h.url).collect()
        }
    }

    impl HitReporter for CollectingReporter {
        fn report(&self, hit: &ScanHit) {
            self.hits.lock().unwrap().push(hit.clone());
        }
    }

    pub fn paths(items: &[&str]) -> std::sync::Arc<[String]> {
        items.iter().map(|p| p.to_string()).collect()
    }
}

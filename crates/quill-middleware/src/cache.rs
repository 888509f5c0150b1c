//! Lazy, thread-safe, single-computation artifact cache.
//!
//! Holds at most one serialized document per middleware instance. The
//! expensive generation path runs at most once, no matter how many requests
//! race on a cold cache: readers take a shared lock on the fast path, and
//! the write lock is the exclusive section with a re-check inside it.

use parking_lot::RwLock;
use std::sync::Arc;

use quill_document::DocumentResult;

/// Memoization cell for the serialized document artifact.
///
/// The artifact is set exactly once per instance and lives for the process
/// lifetime; there is no invalidation or TTL. A failed computation stores
/// nothing, so the next caller retries from scratch.
#[derive(Debug, Default)]
pub struct DocumentCache {
    artifact: RwLock<Option<Arc<str>>>,
}

impl DocumentCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached artifact, or runs `compute` to fill the cache.
    ///
    /// Warm-cache calls return without touching the exclusive section.
    /// On a cold cache exactly one caller runs `compute`; racing callers
    /// block on the write lock, re-check, and observe the completed
    /// artifact. If `compute` fails the error propagates to that caller
    /// only and the cache stays empty.
    pub fn get_or_compute<F>(&self, compute: F) -> DocumentResult<Arc<str>>
    where
        F: FnOnce() -> DocumentResult<String>,
    {
        if let Some(artifact) = self.artifact.read().as_ref() {
            return Ok(Arc::clone(artifact));
        }

        let mut slot = self.artifact.write();
        // Another request may have generated while we waited for the lock.
        if let Some(artifact) = slot.as_ref() {
            return Ok(Arc::clone(artifact));
        }

        let artifact: Arc<str> = compute()?.into();
        *slot = Some(Arc::clone(&artifact));
        Ok(artifact)
    }

    /// Returns the cached artifact without computing.
    #[must_use]
    pub fn get(&self) -> Option<Arc<str>> {
        self.artifact.read().clone()
    }

    /// Whether the artifact has been computed.
    #[must_use]
    pub fn is_warm(&self) -> bool {
        self.artifact.read().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_document::DocumentError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_computes_once() {
        let cache = DocumentCache::new();
        let calls = AtomicUsize::new(0);

        let first = cache
            .get_or_compute(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("artifact".to_string())
            })
            .unwrap();
        let second = cache
            .get_or_compute(|| {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok("other".to_string())
            })
            .unwrap();

        assert_eq!(&*first, "artifact");
        assert_eq!(&*second, "artifact");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_failure_is_not_cached() {
        let cache = DocumentCache::new();

        let err = cache
            .get_or_compute(|| Err(DocumentError::generation("boom")))
            .unwrap_err();
        assert!(err.to_string().contains("boom"));
        assert!(!cache.is_warm());

        let artifact = cache
            .get_or_compute(|| Ok("recovered".to_string()))
            .unwrap();
        assert_eq!(&*artifact, "recovered");
        assert!(cache.is_warm());
    }

    #[test]
    fn test_concurrent_first_access_computes_once() {
        let cache = Arc::new(DocumentCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    cache
                        .get_or_compute(|| {
                            calls.fetch_add(1, Ordering::SeqCst);
                            // Widen the race window while holding the lock.
                            std::thread::sleep(std::time::Duration::from_millis(20));
                            Ok("artifact".to_string())
                        })
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(&*handle.join().unwrap(), "artifact");
        }
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_get_without_compute() {
        let cache = DocumentCache::new();
        assert!(cache.get().is_none());

        cache.get_or_compute(|| Ok("artifact".to_string())).unwrap();
        assert_eq!(cache.get().as_deref(), Some("artifact"));
    }
}

//! Rayon worker configuration for league-wide generation.

use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

/// How many worker threads batch generation uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use the global Rayon pool.
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    #[must_use]
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Build a dedicated pool with this worker count.
    ///
    /// `None` with `workers == 0`, or if the pool could not be built (logged);
    /// callers then run on the current pool.
    pub fn build(&self) -> Option<ThreadPool> {
        if self.workers == 0 {
            return None;
        }
        match ThreadPoolBuilder::new().num_threads(self.workers).build() {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(workers = self.workers, %err, "could not build worker pool");
                None
            }
        }
    }

    /// Run `f` on a pool with this worker count.
    ///
    /// With `workers == 0` the closure runs on the global pool. Otherwise a
    /// temporary pool is built for this one call. Reuse `build` when running
    /// several closures.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        run_on(self.build().as_ref(), f)
    }
}

/// Run `f` on `pool` if there is one, else on the current pool.
pub(crate) fn run_on<F, R>(pool: Option<&ThreadPool>, f: F) -> R
where
    F: FnOnce() -> R + Send,
    R: Send,
{
    match pool {
        Some(pool) => pool.install(f),
        None => f(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_runs_closure() {
        assert_eq!(WorkerPool::default().install(|| 2 + 2), 4);
        assert_eq!(WorkerPool::with_workers(2).install(rayon::current_num_threads), 2);
    }

    #[test]
    fn test_build() {
        assert!(WorkerPool::default().build().is_none());
        let pool = WorkerPool::with_workers(3).build();
        assert_eq!(pool.map(|p| p.current_num_threads()), Some(3));
    }
}

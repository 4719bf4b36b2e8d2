//! One-shot lazy initialization guard and the process-wide demo instance.
//!
//! The guard wraps `std::sync::OnceLock`: the first caller runs the
//! initializer, concurrent callers block until it finishes, and every caller
//! observes the same fully constructed value.
//!
//! Failure policy: an initializer returning `Err` poisons the guard. The error
//! is stored and cloned to every waiting and later caller; the initializer is
//! never retried. A panicking initializer leaves the guard uninitialized
//! (`OnceLock` semantics) and the panic propagates to the caller that ran it.

use std::convert::Infallible;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

use chrono::{DateTime, Local};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Holds at most one initialization outcome for the lifetime of the guard.
pub struct SingletonGuard<T, E = Infallible> {
    cell: OnceLock<Result<Arc<T>, E>>,
    runs: AtomicUsize,
}

impl<T, E> Default for SingletonGuard<T, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, E> SingletonGuard<T, E> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
            runs: AtomicUsize::new(0),
        }
    }

    /// True once an initializer has completed, successfully or not.
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// Number of times an initializer has been started.
    pub fn init_count(&self) -> usize {
        self.runs.load(Ordering::SeqCst)
    }

    /// Non-blocking peek at a successfully initialized value.
    pub fn get(&self) -> Option<Arc<T>> {
        match self.cell.get() {
            Some(Ok(value)) => Some(Arc::clone(value)),
            _ => None,
        }
    }
}

impl<T, E: Clone> SingletonGuard<T, E> {
    /// Return the instance, running `init` if no caller has done so yet.
    pub fn get_or_try_init<F>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let outcome = self.cell.get_or_init(|| {
            self.runs.fetch_add(1, Ordering::SeqCst);
            init().map(Arc::new)
        });
        match outcome {
            Ok(value) => Ok(Arc::clone(value)),
            Err(e) => Err(e.clone()),
        }
    }
}

impl<T> SingletonGuard<T, Infallible> {
    pub fn get_or_init<F>(&self, init: F) -> Arc<T>
    where
        F: FnOnce() -> T,
    {
        match self.get_or_try_init(|| Ok(init())) {
            Ok(value) => value,
            Err(never) => match never {},
        }
    }
}

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for SingletonGuard<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingletonGuard")
            .field("cell", &self.cell.get())
            .field("runs", &self.init_count())
            .finish()
    }
}

/// The process-wide instance. Only `get_instance` can construct it.
#[derive(Debug)]
pub struct SingleInstance {
    id: Uuid,
    created_at: DateTime<Local>,
}

impl SingleInstance {
    fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Local::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

static INSTANCE: SingletonGuard<SingleInstance> = SingletonGuard::new();

/// Get the process-wide instance, constructing it on first access.
#[instrument(level = "trace")]
pub fn get_instance() -> Arc<SingleInstance> {
    INSTANCE.get_or_init(|| {
        let instance = SingleInstance::new();
        info!(id = %instance.id, "Initialize singleton");
        instance
    })
}

/// How many times the process-wide initializer has run (0 or 1).
pub fn instance_init_count() -> usize {
    let count = INSTANCE.init_count();
    debug!(count, "singleton init count");
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_fresh_guard_when_peeking_then_uninitialized() {
        let guard: SingletonGuard<u32> = SingletonGuard::new();
        assert!(!guard.is_initialized());
        assert!(guard.get().is_none());
        assert_eq!(guard.init_count(), 0);
    }

    #[test]
    fn given_initialized_guard_when_initializing_again_then_keeps_first_value() {
        let guard: SingletonGuard<u32> = SingletonGuard::new();
        let first = guard.get_or_init(|| 1);
        let second = guard.get_or_init(|| 2);

        assert_eq!(*second, 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(guard.init_count(), 1);
    }

    #[test]
    fn given_process_instance_when_accessed_twice_then_same_identity() {
        let a = get_instance();
        let b = get_instance();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(a.id(), b.id());
        assert_eq!(instance_init_count(), 1);
    }
}

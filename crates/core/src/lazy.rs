//! Lazily evaluated values with explicit invalidation.
//!
//! An [`Invalidatable`] computes its value on first read, caches it, and
//! recomputes after [`Invalidatable::invalidate`]. An optional teardown hook
//! releases whatever the cached value holds when it is discarded, either by
//! invalidation or by dropping the cell.

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

type Create<T> = Box<dyn Fn() -> T + Send + Sync>;
type Teardown<T> = Box<dyn Fn(T) + Send + Sync>;

/// A lazily computed value that can be invalidated to force recomputation.
///
/// Reads synchronize on an internal lock, so a cell shared between threads
/// evaluates its factory once per invalidation. Lock poisoning is recovered
/// with [`PoisonError::into_inner`] rather than propagated.
///
/// ```
/// use janus_core::lazy::Invalidatable;
///
/// let view = Invalidatable::new(|| "rendered".to_string());
/// assert!(!view.is_evaluated());
/// assert_eq!(view.value(), "rendered");
/// view.invalidate();
/// assert!(!view.is_evaluated());
/// ```
pub struct Invalidatable<T> {
    create: Create<T>,
    teardown: Option<Teardown<T>>,
    slot: Mutex<Option<T>>,
}

impl<T> Invalidatable<T> {
    /// Create an unevaluated cell; `create` runs on first read.
    pub fn new(create: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            create: Box::new(create),
            teardown: None,
            slot: Mutex::new(None),
        }
    }

    /// Attach a teardown hook, run on the cached value when it is discarded.
    #[must_use]
    pub fn with_teardown(mut self, teardown: impl Fn(T) + Send + Sync + 'static) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    /// Borrow the value, evaluating and caching it first if needed.
    ///
    /// The lock is held while `create` and `reader` run, so neither may
    /// re-enter the same cell.
    pub fn with<R>(&self, reader: impl FnOnce(&T) -> R) -> R {
        let mut slot = self.lock();
        let value = slot.get_or_insert_with(|| (self.create)());
        reader(value)
    }

    /// Clone the value out, evaluating and caching it first if needed.
    pub fn value(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Check whether a cached value currently exists.
    #[must_use]
    pub fn is_evaluated(&self) -> bool {
        self.lock().is_some()
    }

    /// Discard the cached value, if any, running the teardown hook on it.
    ///
    /// The next read evaluates `create` again. The lock is released before
    /// the teardown hook runs.
    pub fn invalidate(&self) {
        let discarded = self.lock().take();
        if let Some(value) = discarded {
            debug!("discarding cached value");
            if let Some(teardown) = &self.teardown {
                teardown(value);
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Drop for Invalidatable<T> {
    fn drop(&mut self) {
        let cached = self
            .slot
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let (Some(value), Some(teardown)) = (cached, &self.teardown) {
            teardown(value);
        }
    }
}

impl<T> fmt::Debug for Invalidatable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invalidatable")
            .field("evaluated", &self.is_evaluated())
            .finish_non_exhaustive()
    }
}

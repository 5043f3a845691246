//! Combinators extending [`Option`] for pipeline-style flows.
//!
//! `Option<T>` already carries the core of an optional-value algebra: `map`
//! and `and_then` for projection, `unwrap_or_else` and `or_else` for
//! fallback, `ok_or_else` for raising on absence. This module adds what std
//! leaves out:
//!
//! - presence derived from a default-valued sentinel ([`IntoOption`])
//! - async projections, fallbacks, and hooks ([`OptionExt`])
//! - the same combinators lifted over a pending lookup ([`OptionFutureExt`])
//! - adapters over streams of optional values ([`OptionIteratorExt`])

use std::future::Future;

// ============================================================================
// Presence
// ============================================================================

/// Conversion into an [`Option`] by comparing against the type's default.
pub trait IntoOption: Sized {
    /// Treat the default value of the type as absence.
    ///
    /// Useful at boundaries that encode "no value" as an empty string, an
    /// empty collection, or a zeroed struct. Note the sentinel is the whole
    /// default value: for numeric types this makes a legitimate `0` absent,
    /// so prefer an explicit `Option` where zero is meaningful.
    ///
    /// ```
    /// use janus_core::option::IntoOption;
    ///
    /// assert_eq!("found".to_string().into_option(), Some("found".to_string()));
    /// assert_eq!(String::new().into_option(), None);
    /// assert_eq!(0_u32.into_option(), None);
    /// ```
    fn into_option(self) -> Option<Self>;
}

impl<T: Default + PartialEq> IntoOption for T {
    fn into_option(self) -> Option<Self> {
        if self == Self::default() {
            None
        } else {
            Some(self)
        }
    }
}

// ============================================================================
// Value-level combinators
// ============================================================================

/// Extension trait adding async projections and side-effect hooks to [`Option`].
///
/// Hooks observe the option without changing it, so chains keep flowing:
/// inspect the value (or its absence), get the original option back.
pub trait OptionExt<T>: Sized {
    /// Apply an async projection to the contained value.
    fn map_async<U>(self, projection: impl AsyncFnOnce(T) -> U) -> impl Future<Output = Option<U>>;

    /// Chain an async projection that may itself produce nothing.
    fn and_then_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> Option<U>,
    ) -> impl Future<Output = Option<U>>;

    /// Get the contained value, or compute a fallback asynchronously.
    fn unwrap_or_else_async(self, fallback: impl AsyncFnOnce() -> T) -> impl Future<Output = T>;

    /// Run a hook on the contained value, passing the option through unchanged.
    fn inspect_some(self, hook: impl FnOnce(&T)) -> Self;

    /// Run a hook on absence, passing the option through unchanged.
    fn inspect_none(self, hook: impl FnOnce()) -> Self;

    /// Run an async hook on the contained value, passing the option through unchanged.
    fn inspect_some_async(self, hook: impl AsyncFnOnce(&T)) -> impl Future<Output = Option<T>>;

    /// Run an async hook on absence, passing the option through unchanged.
    fn inspect_none_async(self, hook: impl AsyncFnOnce()) -> impl Future<Output = Option<T>>;
}

impl<T> OptionExt<T> for Option<T> {
    fn map_async<U>(self, projection: impl AsyncFnOnce(T) -> U) -> impl Future<Output = Option<U>> {
        async move {
            match self {
                Some(value) => Some(projection(value).await),
                None => None,
            }
        }
    }

    fn and_then_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> Option<U>,
    ) -> impl Future<Output = Option<U>> {
        async move {
            match self {
                Some(value) => projection(value).await,
                None => None,
            }
        }
    }

    fn unwrap_or_else_async(self, fallback: impl AsyncFnOnce() -> T) -> impl Future<Output = T> {
        async move {
            match self {
                Some(value) => value,
                None => fallback().await,
            }
        }
    }

    fn inspect_some(self, hook: impl FnOnce(&T)) -> Self {
        if let Some(value) = &self {
            hook(value);
        }
        self
    }

    fn inspect_none(self, hook: impl FnOnce()) -> Self {
        if self.is_none() {
            hook();
        }
        self
    }

    fn inspect_some_async(self, hook: impl AsyncFnOnce(&T)) -> impl Future<Output = Option<T>> {
        async move {
            if let Some(value) = &self {
                hook(value).await;
            }
            self
        }
    }

    fn inspect_none_async(self, hook: impl AsyncFnOnce()) -> impl Future<Output = Option<T>> {
        async move {
            if self.is_none() {
                hook().await;
            }
            self
        }
    }
}

// ============================================================================
// Future-level combinators
// ============================================================================

/// Extension trait for futures resolving to an [`Option`].
///
/// Lets a pending lookup chain directly, without an intermediate `.await`:
/// the returned future resolves the lookup and applies the combinator.
pub trait OptionFutureExt<T>: Future<Output = Option<T>> + Sized {
    /// Resolve the lookup and get its value, or compute a fallback asynchronously.
    fn unwrap_or_else_async(self, fallback: impl AsyncFnOnce() -> T) -> impl Future<Output = T>;

    /// Resolve the lookup and run an async hook on the contained value.
    fn inspect_some_async(self, hook: impl AsyncFnOnce(&T)) -> impl Future<Output = Option<T>>;

    /// Resolve the lookup and run an async hook on absence.
    fn inspect_none_async(self, hook: impl AsyncFnOnce()) -> impl Future<Output = Option<T>>;
}

impl<T, F> OptionFutureExt<T> for F
where
    F: Future<Output = Option<T>>,
{
    fn unwrap_or_else_async(self, fallback: impl AsyncFnOnce() -> T) -> impl Future<Output = T> {
        async move { OptionExt::unwrap_or_else_async(self.await, fallback).await }
    }

    fn inspect_some_async(self, hook: impl AsyncFnOnce(&T)) -> impl Future<Output = Option<T>> {
        async move { OptionExt::inspect_some_async(self.await, hook).await }
    }

    fn inspect_none_async(self, hook: impl AsyncFnOnce()) -> impl Future<Output = Option<T>> {
        async move { OptionExt::inspect_none_async(self.await, hook).await }
    }
}

// ============================================================================
// Collection adapters
// ============================================================================

/// Extension trait for iterators over optional values.
pub trait OptionIteratorExt: Iterator + Sized {
    /// Keep only present values, unwrapped. Lazy, like every iterator adapter.
    fn some_values<T>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Option<T>>;

    /// First element of the stream, if any. Consumes at most one element.
    fn first_or_none(self) -> Option<Self::Item>;
}

impl<I: Iterator> OptionIteratorExt for I {
    fn some_values<T>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Option<T>>,
    {
        self.flatten()
    }

    fn first_or_none(mut self) -> Option<Self::Item> {
        self.next()
    }
}

//! Success-or-failure outcomes that carry their cause as data.
//!
//! [`Fallible<T>`] is the failure-path twin of [`Option`]: a computation
//! either produced a value or it failed, and a failed outcome always carries
//! the cause that stopped it. Failures flow through combinator chains as
//! ordinary data; nothing is thrown and nothing panics.
//!
//! The cause channel is deliberately type-erased (see [`Cause`]) so that
//! pipelines mixing many error types compose without naming them all. A
//! handler that needs the concrete type can still recover it by downcast.

use std::any::type_name;
use std::future::Future;

use either::Either;
use itertools::Itertools;
use tracing::error;

use crate::error::Error;

/// The type-erased cause carried by every failed [`Fallible`].
///
/// Any error that is `std::error::Error + Send + Sync + 'static` converts
/// into a `Cause`. The conversion keeps the source chain intact and the
/// concrete type recoverable through [`anyhow::Error::downcast_ref`].
/// Context layered on top, as in [`Fallible::cast`], wraps the original
/// cause rather than replacing it.
pub type Cause = anyhow::Error;

// ============================================================================
// Fallible
// ============================================================================

/// Outcome of an attempted computation: the value it produced, or the cause
/// of its failure.
///
/// Construct outcomes with [`Fallible::attempt`] at the boundary where a
/// fallible operation runs, then transform them with `map` and `and_then`,
/// recover with `or_else`, and observe with the `inspect_*` hooks. Every
/// combinator touches exactly one branch and passes the other through
/// untouched, so a chain settles the moment a failure appears.
///
/// [`Fallible::into_result`] bridges back into `?` propagation when a caller
/// wants the captured cause to resume travelling as an error.
#[derive(Debug)]
#[must_use]
pub enum Fallible<T> {
    /// The computation produced a value.
    Success(T),
    /// The computation failed; the cause is always present.
    Failure(Cause),
}

impl<T> Fallible<T> {
    /// Capture a failure from any error convertible into a [`Cause`].
    pub fn fail(cause: impl Into<Cause>) -> Self {
        Self::Failure(cause.into())
    }

    /// Run a fallible operation, capturing its error as data.
    ///
    /// This is the boundary where typed `Result`s enter the erased cause
    /// channel. Panics are not caught: a panic is a bug, not an outcome.
    ///
    /// ```
    /// use janus_core::fallible::Fallible;
    ///
    /// let parsed = Fallible::attempt(|| "42".parse::<u32>());
    /// assert_eq!(parsed.success(), Some(42));
    ///
    /// let failed = Fallible::attempt(|| "nope".parse::<u32>());
    /// assert!(failed.is_failure());
    /// ```
    pub fn attempt<E>(operation: impl FnOnce() -> Result<T, E>) -> Self
    where
        E: Into<Cause>,
    {
        match operation() {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause.into()),
        }
    }

    /// Run an async fallible operation, capturing its error as data.
    pub async fn attempt_async<E>(operation: impl AsyncFnOnce() -> Result<T, E>) -> Self
    where
        E: Into<Cause>,
    {
        match operation().await {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause.into()),
        }
    }

    /// Check if this outcome is a success.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Check if this outcome is a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Get the success value, if present.
    #[must_use]
    pub fn success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Get the captured cause, if present.
    #[must_use]
    pub fn failure(self) -> Option<Cause> {
        match self {
            Self::Success(_) => None,
            Self::Failure(cause) => Some(cause),
        }
    }

    /// Apply a projection to the success value; a failure passes through.
    pub fn map<U>(self, projection: impl FnOnce(T) -> U) -> Fallible<U> {
        match self {
            Self::Success(value) => Fallible::Success(projection(value)),
            Self::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Chain a projection that may itself fail; a failure passes through.
    pub fn and_then<U>(self, projection: impl FnOnce(T) -> Fallible<U>) -> Fallible<U> {
        match self {
            Self::Success(value) => projection(value),
            Self::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Collapse both branches into one value, with one function per branch.
    #[must_use]
    pub fn fold<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(Cause) -> R,
    ) -> R {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(cause) => on_failure(cause),
        }
    }

    /// Recover from a failure with a replacement outcome; a success passes through.
    pub fn or_else(self, recovery: impl FnOnce(Cause) -> Fallible<T>) -> Fallible<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => recovery(cause),
        }
    }

    /// Get the success value, or compute a replacement from the cause.
    #[must_use]
    pub fn unwrap_or_else(self, recovery: impl FnOnce(Cause) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => recovery(cause),
        }
    }

    /// Run a hook on the success value, passing the outcome through unchanged.
    pub fn inspect_success(self, hook: impl FnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            hook(value);
        }
        self
    }

    /// Run a hook on the cause, passing the outcome through unchanged.
    pub fn inspect_failure(self, hook: impl FnOnce(&Cause)) -> Self {
        if let Self::Failure(cause) = &self {
            hook(cause);
        }
        self
    }

    /// Apply an async projection to the success value; a failure passes through.
    pub async fn map_async<U>(self, projection: impl AsyncFnOnce(T) -> U) -> Fallible<U> {
        match self {
            Self::Success(value) => Fallible::Success(projection(value).await),
            Self::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Chain an async projection that may itself fail; a failure passes through.
    pub async fn and_then_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> Fallible<U>,
    ) -> Fallible<U> {
        match self {
            Self::Success(value) => projection(value).await,
            Self::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Recover from a failure with an async replacement; a success passes through.
    pub async fn or_else_async(
        self,
        recovery: impl AsyncFnOnce(Cause) -> Fallible<T>,
    ) -> Fallible<T> {
        match self {
            Self::Success(value) => Self::Success(value),
            Self::Failure(cause) => recovery(cause).await,
        }
    }

    /// Get the success value, or compute a replacement asynchronously.
    pub async fn unwrap_or_else_async(self, recovery: impl AsyncFnOnce(Cause) -> T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => recovery(cause).await,
        }
    }

    /// Run an async hook on the success value, passing the outcome through unchanged.
    pub async fn inspect_success_async(self, hook: impl AsyncFnOnce(&T)) -> Self {
        if let Self::Success(value) = &self {
            hook(value).await;
        }
        self
    }

    /// Run an async hook on the cause, passing the outcome through unchanged.
    pub async fn inspect_failure_async(self, hook: impl AsyncFnOnce(&Cause)) -> Self {
        if let Self::Failure(cause) = &self {
            hook(cause).await;
        }
        self
    }

    /// Convert back into a `Result`, re-raising the captured cause.
    ///
    /// The cause comes back exactly as captured, so downcasts that worked on
    /// the failure keep working on the error.
    ///
    /// # Errors
    ///
    /// Returns the captured cause when this outcome is a failure.
    pub fn into_result(self) -> Result<T, Cause> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(cause) => Err(cause),
        }
    }

    /// Attempt a checked conversion of the success value.
    ///
    /// A conversion the target type cannot represent becomes a failure whose
    /// cause layers [`Error::CastFailed`] over the converter's own error.
    pub fn cast<U>(self) -> Fallible<U>
    where
        T: TryInto<U>,
        <T as TryInto<U>>::Error: std::error::Error + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => match value.try_into() {
                Ok(converted) => Fallible::Success(converted),
                Err(source) => Fallible::Failure(
                    Cause::new(source).context(Error::cast_failed(type_name::<T>(), type_name::<U>())),
                ),
            },
            Self::Failure(cause) => Fallible::Failure(cause),
        }
    }

    /// Convert to an Option, logging the cause if present.
    #[must_use]
    pub fn into_option_logged(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(cause) => {
                error!("Operation failed: {cause:#}");
                None
            }
        }
    }

    /// Get the success value or the type's default, logging the cause if present.
    #[must_use]
    pub fn unwrap_or_default_logged(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(cause) => {
                error!("Operation failed, using default: {cause:#}");
                T::default()
            }
        }
    }
}

impl<T, E: Into<Cause>> From<Result<T, E>> for Fallible<T> {
    /// Capture a finished `Result` as an outcome.
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(cause) => Self::Failure(cause.into()),
        }
    }
}

// ============================================================================
// Future-level combinators
// ============================================================================

/// Extension trait for futures resolving to a [`Fallible`].
///
/// Lets a pending operation chain directly, without an intermediate `.await`:
/// the returned future resolves the operation, then applies the combinator.
/// Names carry the `success` qualifier where a bare name would collide with
/// the general-purpose future adapters.
pub trait FallibleFutureExt<T>: Future<Output = Fallible<T>> + Sized {
    /// Resolve, then apply a projection to the success value.
    fn map_success<U>(
        self,
        projection: impl FnOnce(T) -> U,
    ) -> impl Future<Output = Fallible<U>>;

    /// Resolve, then apply an async projection to the success value.
    fn map_success_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> U,
    ) -> impl Future<Output = Fallible<U>>;

    /// Resolve, then chain a projection that may itself fail.
    fn and_then<U>(
        self,
        projection: impl FnOnce(T) -> Fallible<U>,
    ) -> impl Future<Output = Fallible<U>>;

    /// Resolve, then chain an async projection that may itself fail.
    fn and_then_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> Fallible<U>,
    ) -> impl Future<Output = Fallible<U>>;

    /// Resolve, then recover from a failure with a replacement outcome.
    fn or_else(
        self,
        recovery: impl FnOnce(Cause) -> Fallible<T>,
    ) -> impl Future<Output = Fallible<T>>;

    /// Resolve, then recover from a failure with an async replacement.
    fn or_else_async(
        self,
        recovery: impl AsyncFnOnce(Cause) -> Fallible<T>,
    ) -> impl Future<Output = Fallible<T>>;

    /// Resolve, then get the success value or compute a replacement.
    fn unwrap_or_else(self, recovery: impl FnOnce(Cause) -> T) -> impl Future<Output = T>;

    /// Resolve, then get the success value or compute a replacement asynchronously.
    fn unwrap_or_else_async(
        self,
        recovery: impl AsyncFnOnce(Cause) -> T,
    ) -> impl Future<Output = T>;

    /// Resolve, then run an async hook on the success value.
    fn inspect_success_async(
        self,
        hook: impl AsyncFnOnce(&T),
    ) -> impl Future<Output = Fallible<T>>;

    /// Resolve, then run an async hook on the cause.
    fn inspect_failure_async(
        self,
        hook: impl AsyncFnOnce(&Cause),
    ) -> impl Future<Output = Fallible<T>>;
}

impl<T, F> FallibleFutureExt<T> for F
where
    F: Future<Output = Fallible<T>>,
{
    fn map_success<U>(
        self,
        projection: impl FnOnce(T) -> U,
    ) -> impl Future<Output = Fallible<U>> {
        async move { self.await.map(projection) }
    }

    fn map_success_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> U,
    ) -> impl Future<Output = Fallible<U>> {
        async move { self.await.map_async(projection).await }
    }

    fn and_then<U>(
        self,
        projection: impl FnOnce(T) -> Fallible<U>,
    ) -> impl Future<Output = Fallible<U>> {
        async move { self.await.and_then(projection) }
    }

    fn and_then_async<U>(
        self,
        projection: impl AsyncFnOnce(T) -> Fallible<U>,
    ) -> impl Future<Output = Fallible<U>> {
        async move { self.await.and_then_async(projection).await }
    }

    fn or_else(
        self,
        recovery: impl FnOnce(Cause) -> Fallible<T>,
    ) -> impl Future<Output = Fallible<T>> {
        async move { self.await.or_else(recovery) }
    }

    fn or_else_async(
        self,
        recovery: impl AsyncFnOnce(Cause) -> Fallible<T>,
    ) -> impl Future<Output = Fallible<T>> {
        async move { self.await.or_else_async(recovery).await }
    }

    fn unwrap_or_else(self, recovery: impl FnOnce(Cause) -> T) -> impl Future<Output = T> {
        async move { self.await.unwrap_or_else(recovery) }
    }

    fn unwrap_or_else_async(
        self,
        recovery: impl AsyncFnOnce(Cause) -> T,
    ) -> impl Future<Output = T> {
        async move { self.await.unwrap_or_else_async(recovery).await }
    }

    fn inspect_success_async(
        self,
        hook: impl AsyncFnOnce(&T),
    ) -> impl Future<Output = Fallible<T>> {
        async move { self.await.inspect_success_async(hook).await }
    }

    fn inspect_failure_async(
        self,
        hook: impl AsyncFnOnce(&Cause),
    ) -> impl Future<Output = Fallible<T>> {
        async move { self.await.inspect_failure_async(hook).await }
    }
}

// ============================================================================
// Collection adapters
// ============================================================================

/// Extension trait for iterators over outcomes.
pub trait FallibleIteratorExt: Iterator + Sized {
    /// Keep only success values, in encounter order. Lazy.
    fn successes<T>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Fallible<T>>;

    /// Keep only captured causes, in encounter order. Lazy.
    fn failures<T>(self) -> impl Iterator<Item = Cause>
    where
        Self: Iterator<Item = Fallible<T>>;

    /// Split a stream of outcomes into its values and its causes.
    ///
    /// Each side preserves encounter order.
    fn partition_outcomes<T>(self) -> (Vec<T>, Vec<Cause>)
    where
        Self: Iterator<Item = Fallible<T>>;
}

impl<I: Iterator> FallibleIteratorExt for I {
    fn successes<T>(self) -> impl Iterator<Item = T>
    where
        Self: Iterator<Item = Fallible<T>>,
    {
        self.filter_map(Fallible::success)
    }

    fn failures<T>(self) -> impl Iterator<Item = Cause>
    where
        Self: Iterator<Item = Fallible<T>>,
    {
        self.filter_map(Fallible::failure)
    }

    fn partition_outcomes<T>(self) -> (Vec<T>, Vec<Cause>)
    where
        Self: Iterator<Item = Fallible<T>>,
    {
        self.partition_map(|outcome| match outcome {
            Fallible::Success(value) => Either::Left(value),
            Fallible::Failure(cause) => Either::Right(cause),
        })
    }
}

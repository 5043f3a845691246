//! # Janus Core
//!
//! Functional outcome containers and combinators for view-model pipelines.
//!
//! Two containers carry every outcome in Janus:
//!
//! - [`Option<T>`] for values that may be absent, extended by the traits in
//!   [`option`]
//! - [`Fallible<T>`] for operations that may fail, carrying the cause of the
//!   failure as plain data
//!
//! Both sides follow the same discipline: construct at the boundary, then
//! transform with combinators that touch exactly one branch while the other
//! flows through untouched. Sync and async chains read the same way, and
//! [`lazy::Invalidatable`] covers derived values that are expensive to
//! recompute.
//!
//! ```
//! use janus_core::prelude::*;
//!
//! let outcome = Fallible::attempt(|| "21".parse::<i32>())
//!     .map(|n| n.wrapping_mul(2))
//!     .inspect_failure(|cause| eprintln!("parse failed: {cause:#}"));
//! assert_eq!(outcome.success(), Some(42));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod fallible;
pub mod lazy;
pub mod option;
pub mod prelude;

pub use error::Error;
pub use fallible::{Cause, Fallible, FallibleFutureExt, FallibleIteratorExt};
pub use lazy::Invalidatable;
pub use option::{IntoOption, OptionExt, OptionFutureExt, OptionIteratorExt};

//! Common imports for outcome-pipeline code.
//!
//! ```
//! use janus_core::prelude::*;
//! ```

// Functional iterator utilities
pub use itertools::Itertools;

// Outcome types and their combinator surfaces
pub use crate::error::Error;
pub use crate::fallible::{Cause, Fallible, FallibleFutureExt, FallibleIteratorExt};
pub use crate::lazy::Invalidatable;
pub use crate::option::{IntoOption, OptionExt, OptionFutureExt, OptionIteratorExt};

// Variant names, for constructing and matching without the enum prefix
pub use crate::fallible::Fallible::{Failure, Success};

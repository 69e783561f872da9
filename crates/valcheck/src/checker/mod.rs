//! Checker contract and the concrete checker types.
//!
//! A checker is one strongly-typed range-validation strategy: it is
//! bound to a single attribute, carries optional min/max bounds parsed
//! from text, and answers whether a record's value lies inside the
//! closed interval. Concrete checkers are registered in
//! [`crate::registry`] and constructed there by index.

use crate::attributes::{AttributeAccessor, Record};
use crate::error::Result;

mod point;
mod scalar;

pub use point::PointChecker;
pub use scalar::{ScalarChecker, ScalarValue};

/// One range-validation strategy, polymorphic over its value type.
///
/// Setters treat empty input as "leave the current value unchanged" and
/// return success without touching state.
pub trait Checker: std::fmt::Debug {
    /// Re-bind the checker to a different attribute name.
    fn bind_attribute(&mut self, name: &str, accessor: &dyn AttributeAccessor) -> Result<()>;

    /// Parse `text` into the value type and set it as the lower bound.
    fn set_min(&mut self, text: &str) -> Result<()>;

    /// Parse `text` into the value type and set it as the upper bound.
    fn set_max(&mut self, text: &str) -> Result<()>;

    /// True iff the bound attribute's value in `record` lies within
    /// `[min, max]`, inclusive on every axis. Unset bounds pass.
    fn in_limits(&self, accessor: &dyn AttributeAccessor, record: &Record) -> Result<bool>;
}

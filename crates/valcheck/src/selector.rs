//! Runtime selection and dispatch.
//!
//! The selector owns the one live checker instance and the accessor it
//! resolves against. Selecting a new type replaces the instance
//! wholesale: nothing carries over, because bounds typed for one value
//! type are meaningless to another. Callers reapply what they need.

use crate::attributes::{AttributeAccessor, Record};
use crate::checker::Checker;
use crate::error::{CheckError, Result};
use crate::registry;
use tracing::debug;

/// Stateful coordinator owning the active checker slot.
///
/// Generic over the accessor so hosts and tests can supply their own
/// attribute store. All configuration setters treat empty input as
/// "no change" and succeed without touching the slot.
#[derive(Debug)]
pub struct CheckerSelector<A: AttributeAccessor> {
    accessor: A,
    active: Option<Box<dyn Checker>>,
    selected: Option<usize>,
}

impl<A: AttributeAccessor> CheckerSelector<A> {
    pub fn new(accessor: A) -> Self {
        Self {
            accessor,
            active: None,
            selected: None,
        }
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Index of the currently active checker type, if any.
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self) -> bool {
        self.active.is_some()
    }

    /// Construct the checker type at `index`, bound to `attr_name`, and
    /// make it the active checker. On failure the previous checker
    /// stays active.
    pub fn select(&mut self, index: usize, attr_name: &str) -> Result<()> {
        let checker = registry::create(index, attr_name, &self.accessor)?;
        debug!(index, attr = attr_name, "selected checker type");
        self.active = Some(checker);
        self.selected = Some(index);
        Ok(())
    }

    /// Re-bind the active checker to a different attribute name.
    pub fn apply_attribute_name(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        let accessor = &self.accessor;
        match self.active.as_mut() {
            None => Err(CheckError::NotReady),
            Some(checker) => checker.bind_attribute(name, accessor),
        }
    }

    /// Parse and apply a new lower bound on the active checker.
    pub fn apply_min(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        match self.active.as_mut() {
            None => Err(CheckError::NotReady),
            Some(checker) => checker.set_min(text),
        }
    }

    /// Parse and apply a new upper bound on the active checker.
    pub fn apply_max(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        match self.active.as_mut() {
            None => Err(CheckError::NotReady),
            Some(checker) => checker.set_max(text),
        }
    }

    /// Evaluate a record against the active checker's bounds.
    pub fn evaluate(&self, record: &Record) -> Result<bool> {
        match &self.active {
            None => Err(CheckError::NotReady),
            Some(checker) => checker.in_limits(&self.accessor, record),
        }
    }
}

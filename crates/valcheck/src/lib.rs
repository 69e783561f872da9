//! # valcheck
//!
//! Attribute range checking with statically registered, runtime-selected
//! checker types.
//!
//! The tension this crate resolves: the set of supported value types and
//! their comparison/parsing logic is fixed at build time, but which
//! checker is *active* is chosen at runtime by a bare integer index that
//! hosts persist in their configuration. The registry makes the first
//! half exhaustive and the selector makes the second half safe.
//!
//! ## Layers
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Facade (plugin.rs)                                      │
//! │  - Host-facing property handlers, verdict stamping       │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Selection (selector.rs, registry.rs)                    │
//! │  - Index → checker construction, active checker slot     │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Checkers (checker/)                                     │
//! │  - Typed interval tests, bound text parsing              │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │  Attributes (attributes/)                                │
//! │  - Kinds, values, records, resolution handles            │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registry order is a contract
//!
//! Checker type indexes are shown to users and persisted as bare
//! integers, so [`registry::CHECKERS`] is append-only: new types go at
//! the end, existing entries are never reordered or removed.
//!
//! ## Concurrency
//!
//! Checking is single-threaded and synchronous. The registry is
//! immutable and shareable; the selector and facade are exclusively
//! owned and provide no internal locking, so a concurrent host must
//! serialize access itself.
//!
//! ## Module Overview
//!
//! - [`attributes`]: kinds, values, records, and the accessor contract
//! - [`checker`]: the checker contract and concrete checker types
//! - [`registry`]: the fixed, ordered list of checker types
//! - [`selector`]: runtime selection and dispatch
//! - [`plugin`]: the host-facing facade
//! - [`config`]: TOML configuration with compiled-in defaults
//! - [`error`]: error types

pub mod attributes;
pub mod checker;
pub mod config;
pub mod error;
pub mod plugin;
pub mod registry;
pub mod selector;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use attributes::{
    AccessMode, AttrHandle, AttrKind, AttrValue, AttributeAccessor, Point, Record, SchemaAccessor,
};
pub use checker::{Checker, PointChecker, ScalarChecker, ScalarValue};
pub use config::CheckerConfig;
pub use error::{CheckError, Result};
pub use plugin::ValueCheckerPlugin;
pub use registry::{catalogue, CheckerSpec, CHECKERS};
pub use selector::CheckerSelector;

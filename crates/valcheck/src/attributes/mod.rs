//! # Attribute System
//!
//! A unified abstraction for the named, typed values that checkers
//! inspect. Instead of each checker knowing how the host stores its
//! data, the attribute system provides:
//!
//! - **Kinds and values**: what attribute slots can hold ([`AttrKind`],
//!   [`AttrValue`], [`Point`])
//! - **Records**: one named bag of values per evaluation ([`Record`])
//! - **Resolution**: names become typed, mode-checked handles before
//!   any evaluation runs ([`AttributeAccessor`], [`AttrHandle`])
//!
//! ## Attribute Kinds
//!
//! | Kind | Example | Description |
//! |------|---------|-------------|
//! | `Float` | `region` | 64-bit floating point scalar |
//! | `Int` | `count` | 64-bit signed integer scalar |
//! | `Point` | `center` | 2-component point |
//! | `Bool` | `defect` | Flag, used for check verdicts |
//!
//! ## Usage
//!
//! ```
//! use valcheck::attributes::{AccessMode, AttrKind, AttrValue, AttributeAccessor, Record, SchemaAccessor};
//!
//! let accessor = SchemaAccessor::new();
//! accessor.declare("region", AttrKind::Float);
//!
//! let handle = accessor.resolve("region", AttrKind::Float, AccessMode::Read).unwrap();
//!
//! let mut record = Record::new();
//! record.set("region", AttrValue::Float(2.0));
//! assert_eq!(accessor.read(&handle, &record).unwrap(), &AttrValue::Float(2.0));
//! ```

mod accessor;
mod value;

pub use accessor::{AccessMode, AttrHandle, AttributeAccessor, SchemaAccessor};
pub use value::{AttrKind, AttrValue, Point, Record};

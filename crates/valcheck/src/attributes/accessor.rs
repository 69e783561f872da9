//! Attribute resolution and typed access.
//!
//! Checkers never touch records directly by name. They hold an
//! [`AttrHandle`] resolved up front by an [`AttributeAccessor`], and all
//! reads and writes go through it. Resolution is where a name is checked
//! against the expected kind and access mode, so a misconfigured
//! attribute fails at bind time, not in the middle of evaluation.

use super::value::{AttrKind, AttrValue, Record};
use crate::error::{CheckError, Result};
use std::cell::RefCell;
use std::collections::HashMap;

/// How a resolved handle may touch the record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    /// The slot must already exist with the expected kind; reads only.
    Read,

    /// The slot is registered (or re-registered) by the resolver;
    /// writes only. Used for the verdict attribute owned by the host.
    Create,
}

/// A resolved (name, kind, mode) triple into the attribute store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttrHandle {
    name: String,
    kind: AttrKind,
    mode: AccessMode,
}

impl AttrHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> AttrKind {
        self.kind
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }
}

/// Contract the surrounding host must satisfy to supply attributes.
///
/// `resolve` turns a name into a typed handle or fails with a
/// resolution error; `read`/`write` move values between a handle and a
/// concrete record. Mode violations (reading a write-only handle and
/// vice versa) are resolution errors.
pub trait AttributeAccessor {
    fn resolve(&self, name: &str, kind: AttrKind, mode: AccessMode) -> Result<AttrHandle>;

    fn read<'r>(&self, handle: &AttrHandle, record: &'r Record) -> Result<&'r AttrValue>;

    fn write(&self, handle: &AttrHandle, record: &mut Record, value: AttrValue) -> Result<()>;
}

/// Accessor backed by an explicit name -> kind schema.
///
/// Uses `RefCell` for interior mutability since checking is
/// single-threaded; `Create`-mode resolution registers the slot in the
/// schema as it resolves.
#[derive(Debug, Default)]
pub struct SchemaAccessor {
    schema: RefCell<HashMap<String, AttrKind>>,
}

impl SchemaAccessor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a slot up front, as a host with a fixed schema would.
    pub fn declare(&self, name: impl Into<String>, kind: AttrKind) {
        self.schema.borrow_mut().insert(name.into(), kind);
    }

    /// Build a schema from the shape of an example record.
    pub fn from_record(record: &Record) -> Self {
        let accessor = Self::new();
        for (name, value) in record.iter() {
            accessor.declare(name, value.kind());
        }
        accessor
    }

    pub fn kind_of(&self, name: &str) -> Option<AttrKind> {
        self.schema.borrow().get(name).copied()
    }
}

impl AttributeAccessor for SchemaAccessor {
    fn resolve(&self, name: &str, kind: AttrKind, mode: AccessMode) -> Result<AttrHandle> {
        if name.is_empty() {
            return Err(CheckError::Resolution {
                name: name.to_string(),
                reason: "attribute name is empty".to_string(),
            });
        }

        match mode {
            AccessMode::Create => {
                self.schema.borrow_mut().insert(name.to_string(), kind);
            }
            AccessMode::Read => match self.schema.borrow().get(name) {
                None => {
                    return Err(CheckError::Resolution {
                        name: name.to_string(),
                        reason: "not present in the schema".to_string(),
                    });
                }
                Some(actual) if !actual.coerces_to(kind) => {
                    return Err(CheckError::Resolution {
                        name: name.to_string(),
                        reason: format!("schema holds {actual}, expected {kind}"),
                    });
                }
                Some(_) => {}
            },
        }

        Ok(AttrHandle {
            name: name.to_string(),
            kind,
            mode,
        })
    }

    fn read<'r>(&self, handle: &AttrHandle, record: &'r Record) -> Result<&'r AttrValue> {
        if handle.mode != AccessMode::Read {
            return Err(CheckError::Resolution {
                name: handle.name.clone(),
                reason: "handle is write-only".to_string(),
            });
        }

        let value = record.get(&handle.name).ok_or_else(|| CheckError::Resolution {
            name: handle.name.clone(),
            reason: "missing from record".to_string(),
        })?;

        if !value.kind().coerces_to(handle.kind) {
            return Err(CheckError::Resolution {
                name: handle.name.clone(),
                reason: format!("record holds {}, expected {}", value.kind(), handle.kind),
            });
        }

        Ok(value)
    }

    fn write(&self, handle: &AttrHandle, record: &mut Record, value: AttrValue) -> Result<()> {
        if handle.mode != AccessMode::Create {
            return Err(CheckError::Resolution {
                name: handle.name.clone(),
                reason: "handle is read-only".to_string(),
            });
        }

        if !value.kind().coerces_to(handle.kind) {
            return Err(CheckError::Resolution {
                name: handle.name.clone(),
                reason: format!("cannot store {} into a {} slot", value.kind(), handle.kind),
            });
        }

        record.set(handle.name.clone(), value);
        Ok(())
    }
}

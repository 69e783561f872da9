//! Registry of all checker types.
//!
//! This is the single source of truth for which checker types exist.
//! A type's position in [`CHECKERS`] is its public index: hosts persist
//! the index as a bare integer, so entries must never be reordered or
//! removed. Adding a new checker type means appending an entry here.

use crate::attributes::AttributeAccessor;
use crate::checker::{Checker, PointChecker, ScalarChecker, ScalarValue};
use crate::error::{CheckError, Result};
use once_cell::sync::Lazy;

/// One registered checker type: a display name and a factory.
pub struct CheckerSpec {
    /// Name shown in the catalogue (e.g. "float64")
    pub type_name: &'static str,

    make: fn(&str, &dyn AttributeAccessor) -> Result<Box<dyn Checker>>,
}

fn make_float64(attr_name: &str, accessor: &dyn AttributeAccessor) -> Result<Box<dyn Checker>> {
    Ok(Box::new(ScalarChecker::<f64>::new(attr_name, accessor)?))
}

fn make_point2d(attr_name: &str, accessor: &dyn AttributeAccessor) -> Result<Box<dyn Checker>> {
    Ok(Box::new(PointChecker::new(attr_name, accessor)?))
}

fn make_int64(attr_name: &str, accessor: &dyn AttributeAccessor) -> Result<Box<dyn Checker>> {
    Ok(Box::new(ScalarChecker::<i64>::new(attr_name, accessor)?))
}

/// All registered checker types, in index order. Append-only.
pub const CHECKERS: &[CheckerSpec] = &[
    CheckerSpec {
        type_name: <f64 as ScalarValue>::TYPE_NAME,
        make: make_float64,
    },
    CheckerSpec {
        type_name: PointChecker::TYPE_NAME,
        make: make_point2d,
    },
    CheckerSpec {
        type_name: <i64 as ScalarValue>::TYPE_NAME,
        make: make_int64,
    },
];

/// Construct the checker type registered at `index`, bound to
/// `attr_name`. An index outside the registry is a selection error.
pub fn create(
    index: usize,
    attr_name: &str,
    accessor: &dyn AttributeAccessor,
) -> Result<Box<dyn Checker>> {
    let spec = CHECKERS.get(index).ok_or(CheckError::Selection {
        index,
        count: CHECKERS.len(),
    })?;
    (spec.make)(attr_name, accessor)
}

/// Human-readable catalogue of registered types, `[name index]` per
/// entry, built once per process.
pub fn catalogue() -> &'static str {
    static CATALOGUE: Lazy<String> = Lazy::new(|| {
        let mut out = String::new();
        for (index, spec) in CHECKERS.iter().enumerate() {
            out.push_str(&format!("[{} {}]", spec.type_name, index));
        }
        out
    });
    &CATALOGUE
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{AttrKind, AttrValue, Record, SchemaAccessor};

    #[test]
    fn published_indexes_are_stable() {
        assert_eq!(CHECKERS[0].type_name, "float64");
        assert_eq!(CHECKERS[1].type_name, "point2d");
        assert_eq!(CHECKERS[2].type_name, "int64");
    }

    #[test]
    fn catalogue_lists_every_type_in_order() {
        assert_eq!(catalogue(), "[float64 0][point2d 1][int64 2]");
    }

    #[test]
    fn catalogue_entry_count_matches_registry() {
        let entries = catalogue().matches('[').count();
        assert_eq!(entries, CHECKERS.len());
    }

    #[test]
    fn catalogue_is_built_once() {
        let first: *const u8 = catalogue().as_ptr();
        let second: *const u8 = catalogue().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn create_constructs_the_right_variant() {
        let accessor = SchemaAccessor::new();
        accessor.declare("region", AttrKind::Float);
        accessor.declare("center", AttrKind::Point);

        let float_checker = create(0, "region", &accessor).unwrap();
        let mut record = Record::new();
        record.set("region", AttrValue::Float(1.0));
        assert!(float_checker.in_limits(&accessor, &record).unwrap());

        // The point checker refuses the float attribute, so index 1
        // really constructed a different type.
        assert!(create(1, "region", &accessor).is_err());
        assert!(create(1, "center", &accessor).is_ok());
    }

    #[test]
    fn out_of_range_index_is_a_selection_error() {
        let accessor = SchemaAccessor::new();
        let err = create(CHECKERS.len(), "region", &accessor).unwrap_err();
        match err {
            CheckError::Selection { index, count } => {
                assert_eq!(index, CHECKERS.len());
                assert_eq!(count, CHECKERS.len());
            }
            other => panic!("expected Selection error, got {other:?}"),
        }
    }
}

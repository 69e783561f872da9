//! Generic scalar range checker.

use super::Checker;
use crate::attributes::{AccessMode, AttrHandle, AttrKind, AttrValue, AttributeAccessor, Record};
use crate::error::{CheckError, Result};

/// An ordered, text-parseable scalar usable by [`ScalarChecker`].
///
/// The associated constants are the compile-time identity of the
/// checker type: the attribute kind it binds to and the name shown in
/// the registry catalogue.
pub trait ScalarValue: Copy + PartialOrd + std::fmt::Debug {
    const KIND: AttrKind;
    const TYPE_NAME: &'static str;

    fn parse(text: &str) -> std::result::Result<Self, String>;

    fn from_attr(value: &AttrValue) -> Option<Self>;
}

impl ScalarValue for f64 {
    const KIND: AttrKind = AttrKind::Float;
    const TYPE_NAME: &'static str = "float64";

    fn parse(text: &str) -> std::result::Result<Self, String> {
        text.trim().parse::<f64>().map_err(|e| e.to_string())
    }

    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_float()
    }
}

impl ScalarValue for i64 {
    const KIND: AttrKind = AttrKind::Int;
    const TYPE_NAME: &'static str = "int64";

    fn parse(text: &str) -> std::result::Result<Self, String> {
        text.trim().parse::<i64>().map_err(|e| e.to_string())
    }

    fn from_attr(value: &AttrValue) -> Option<Self> {
        value.as_int()
    }
}

/// Range checker for a single ordered scalar attribute.
///
/// Constructed already bound to an attribute; bounds start unset and
/// an unset side passes every value.
#[derive(Debug)]
pub struct ScalarChecker<T: ScalarValue> {
    handle: AttrHandle,
    min: Option<T>,
    max: Option<T>,
}

impl<T: ScalarValue> ScalarChecker<T> {
    pub fn new(attr_name: &str, accessor: &dyn AttributeAccessor) -> Result<Self> {
        let handle = accessor.resolve(attr_name, T::KIND, AccessMode::Read)?;
        Ok(Self {
            handle,
            min: None,
            max: None,
        })
    }
}

impl<T: ScalarValue> Checker for ScalarChecker<T> {
    fn bind_attribute(&mut self, name: &str, accessor: &dyn AttributeAccessor) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        self.handle = accessor.resolve(name, T::KIND, AccessMode::Read)?;
        Ok(())
    }

    fn set_min(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.min = Some(T::parse(text).map_err(|reason| CheckError::Parse {
            text: text.to_string(),
            reason,
        })?);
        Ok(())
    }

    fn set_max(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.max = Some(T::parse(text).map_err(|reason| CheckError::Parse {
            text: text.to_string(),
            reason,
        })?);
        Ok(())
    }

    fn in_limits(&self, accessor: &dyn AttributeAccessor, record: &Record) -> Result<bool> {
        let value = accessor.read(&self.handle, record)?;
        let v = T::from_attr(value).ok_or_else(|| CheckError::Resolution {
            name: self.handle.name().to_string(),
            reason: format!("record holds {}, expected {}", value.kind(), T::KIND),
        })?;

        let above_min = self.min.map_or(true, |min| v >= min);
        let below_max = self.max.map_or(true, |max| v <= max);
        Ok(above_min && below_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::SchemaAccessor;

    fn setup() -> (SchemaAccessor, ScalarChecker<f64>) {
        let accessor = SchemaAccessor::new();
        accessor.declare("region", AttrKind::Float);
        let checker = ScalarChecker::<f64>::new("region", &accessor).unwrap();
        (accessor, checker)
    }

    fn record_with(value: f64) -> Record {
        let mut record = Record::new();
        record.set("region", AttrValue::Float(value));
        record
    }

    #[test]
    fn new_fails_for_unknown_attribute() {
        let accessor = SchemaAccessor::new();
        let err = ScalarChecker::<f64>::new("region", &accessor).unwrap_err();
        assert!(matches!(err, CheckError::Resolution { .. }));
    }

    #[test]
    fn bounds_are_inclusive_at_both_ends() {
        let (accessor, mut checker) = setup();
        checker.set_min("1.5").unwrap();
        checker.set_max("3.5").unwrap();

        assert!(checker.in_limits(&accessor, &record_with(1.5)).unwrap());
        assert!(checker.in_limits(&accessor, &record_with(2.0)).unwrap());
        assert!(checker.in_limits(&accessor, &record_with(3.5)).unwrap());
        assert!(!checker.in_limits(&accessor, &record_with(1.4)).unwrap());
        assert!(!checker.in_limits(&accessor, &record_with(4.0)).unwrap());
    }

    #[test]
    fn unset_bounds_pass_everything() {
        let (accessor, checker) = setup();
        assert!(checker.in_limits(&accessor, &record_with(-1e9)).unwrap());
        assert!(checker.in_limits(&accessor, &record_with(1e9)).unwrap());
    }

    #[test]
    fn only_min_set_leaves_top_open() {
        let (accessor, mut checker) = setup();
        checker.set_min("0.0").unwrap();

        assert!(checker.in_limits(&accessor, &record_with(1e12)).unwrap());
        assert!(!checker.in_limits(&accessor, &record_with(-0.1)).unwrap());
    }

    #[test]
    fn malformed_bound_text_fails_at_set_time() {
        let (accessor, mut checker) = setup();
        let err = checker.set_min("abc").unwrap_err();
        assert!(matches!(err, CheckError::Parse { .. }));

        // Nothing was applied, evaluation is unaffected.
        assert!(checker.in_limits(&accessor, &record_with(0.0)).unwrap());
    }

    #[test]
    fn empty_text_is_a_no_op() {
        let (accessor, mut checker) = setup();
        checker.set_min("1.0").unwrap();
        checker.set_min("").unwrap();
        checker.set_max("").unwrap();
        checker.bind_attribute("", &accessor).unwrap();

        assert!(!checker.in_limits(&accessor, &record_with(0.5)).unwrap());
        assert!(checker.in_limits(&accessor, &record_with(1.0)).unwrap());
    }

    #[test]
    fn rebind_to_another_attribute() {
        let (accessor, mut checker) = setup();
        accessor.declare("area", AttrKind::Float);
        checker.bind_attribute("area", &accessor).unwrap();

        let mut record = Record::new();
        record.set("area", AttrValue::Float(2.0));
        assert!(checker.in_limits(&accessor, &record).unwrap());
    }

    #[test]
    fn float_checker_reads_int_values() {
        let accessor = SchemaAccessor::new();
        accessor.declare("count", AttrKind::Int);
        let mut checker = ScalarChecker::<f64>::new("count", &accessor).unwrap();
        checker.set_min("2").unwrap();
        checker.set_max("4").unwrap();

        let mut record = Record::new();
        record.set("count", AttrValue::Int(3));
        assert!(checker.in_limits(&accessor, &record).unwrap());
    }

    #[test]
    fn int_checker_parses_and_compares() {
        let accessor = SchemaAccessor::new();
        accessor.declare("count", AttrKind::Int);
        let mut checker = ScalarChecker::<i64>::new("count", &accessor).unwrap();
        checker.set_min("10").unwrap();
        checker.set_max("20").unwrap();

        let mut record = Record::new();
        record.set("count", AttrValue::Int(10));
        assert!(checker.in_limits(&accessor, &record).unwrap());
        record.set("count", AttrValue::Int(21));
        assert!(!checker.in_limits(&accessor, &record).unwrap());

        assert!(matches!(
            checker.set_min("1.5").unwrap_err(),
            CheckError::Parse { .. }
        ));
    }

    #[test]
    fn bound_text_tolerates_surrounding_whitespace() {
        let (accessor, mut checker) = setup();
        checker.set_min(" 1.5 ").unwrap();
        assert!(checker.in_limits(&accessor, &record_with(1.5)).unwrap());
        assert!(!checker.in_limits(&accessor, &record_with(1.0)).unwrap());
    }
}

//! # Value Checker Facade
//!
//! [`ValueCheckerPlugin`] is the entry point a host embeds: it holds
//! the configured attribute names and bound text, forwards changes to
//! the selector, and stamps each processed record with the boolean
//! verdict.
//!
//! Like the selector it wraps, the facade returns structured results
//! and never touches I/O; surfacing rejected configuration to a user is
//! the host's job.

use crate::attributes::{
    AccessMode, AttrHandle, AttrKind, AttrValue, AttributeAccessor, Record,
};
use crate::config::CheckerConfig;
use crate::error::Result;
use crate::registry;
use crate::selector::CheckerSelector;
use tracing::debug;

/// Checks one attribute of each incoming record against configured
/// limits and writes the verdict to a result attribute.
///
/// Change handlers mirror host property callbacks: each treats empty
/// input as "no change". Switching the data type deliberately does not
/// re-apply previously configured bound text: the old text may not
/// even parse under the new type's format, so bounds must be set again
/// after a switch.
#[derive(Debug)]
pub struct ValueCheckerPlugin<A: AttributeAccessor> {
    selector: CheckerSelector<A>,
    checked_attr: String,
    result_attr: String,
    result_handle: AttrHandle,
    min_value: String,
    max_value: String,
}

impl<A: AttributeAccessor> ValueCheckerPlugin<A> {
    /// Create a facade with default property values and no checker type
    /// selected yet. The result attribute is resolved immediately in
    /// `Create` mode; the checker waits for the first data-type change.
    pub fn new(accessor: A) -> Result<Self> {
        let defaults = CheckerConfig::default();
        let result_handle =
            accessor.resolve(&defaults.result_attr, AttrKind::Bool, AccessMode::Create)?;
        Ok(Self {
            selector: CheckerSelector::new(accessor),
            checked_attr: defaults.checked_attr,
            result_attr: defaults.result_attr,
            result_handle,
            min_value: defaults.min_value,
            max_value: defaults.max_value,
        })
    }

    /// Create a facade and apply a full configuration: data type,
    /// attribute names, then bounds.
    pub fn from_config(accessor: A, config: &CheckerConfig) -> Result<Self> {
        let mut plugin = Self::new(accessor)?;
        plugin.set_checked_attr(&config.checked_attr)?;
        plugin.set_result_attr(&config.result_attr)?;
        plugin.set_data_type(config.data_type)?;
        plugin.set_min(&config.min_value)?;
        plugin.set_max(&config.max_value)?;
        Ok(plugin)
    }

    /// Select the checker type at `index`, bound to the current checked
    /// attribute. Previously applied bounds do not carry over.
    pub fn set_data_type(&mut self, index: usize) -> Result<()> {
        self.selector.select(index, &self.checked_attr)
    }

    /// Select a checker type and re-target the checked attribute in one
    /// step. Required when the new type expects a different attribute
    /// kind: there the two individual setters would each reject the
    /// half-switched state.
    pub fn set_checker(&mut self, index: usize, name: &str) -> Result<()> {
        let attr = if name.is_empty() {
            self.checked_attr.clone()
        } else {
            name.to_string()
        };
        self.selector.select(index, &attr)?;
        self.checked_attr = attr;
        Ok(())
    }

    /// Change which attribute is checked.
    pub fn set_checked_attr(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        if self.selector.is_selected() {
            self.selector.apply_attribute_name(name)?;
        }
        self.checked_attr = name.to_string();
        Ok(())
    }

    /// Change which attribute receives the verdict.
    pub fn set_result_attr(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        self.result_handle =
            self.selector
                .accessor()
                .resolve(name, AttrKind::Bool, AccessMode::Create)?;
        self.result_attr = name.to_string();
        Ok(())
    }

    pub fn set_min(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.selector.apply_min(text)?;
        self.min_value = text.to_string();
        Ok(())
    }

    pub fn set_max(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.selector.apply_max(text)?;
        self.max_value = text.to_string();
        Ok(())
    }

    /// Evaluate the record and stamp the verdict onto it.
    pub fn process(&self, record: &mut Record) -> Result<bool> {
        let verdict = self.selector.evaluate(record)?;
        self.selector
            .accessor()
            .write(&self.result_handle, record, AttrValue::Bool(verdict))?;
        debug!(
            attr = %self.checked_attr,
            result = %self.result_attr,
            verdict,
            "record processed"
        );
        Ok(verdict)
    }

    pub fn checked_attr(&self) -> &str {
        &self.checked_attr
    }

    pub fn result_attr(&self) -> &str {
        &self.result_attr
    }

    pub fn min_value(&self) -> &str {
        &self.min_value
    }

    pub fn max_value(&self) -> &str {
        &self.max_value
    }

    /// Index of the currently selected checker type, if any.
    pub fn data_type(&self) -> Option<usize> {
        self.selector.selected_index()
    }

    /// Catalogue of registered checker types, for host display.
    pub fn catalogue() -> &'static str {
        registry::catalogue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::SchemaAccessor;
    use crate::error::CheckError;
    use crate::test_utils::{accessor_for, record};

    fn accessor() -> SchemaAccessor {
        let accessor = SchemaAccessor::new();
        accessor.declare("region", AttrKind::Float);
        accessor
    }

    #[test]
    fn new_resolves_the_result_attribute_but_selects_nothing() {
        let plugin = ValueCheckerPlugin::new(accessor()).unwrap();
        assert_eq!(plugin.data_type(), None);
        assert_eq!(plugin.result_attr(), "defect");

        let mut record = record(&[("region", AttrValue::Float(1.0))]);
        assert!(matches!(
            plugin.process(&mut record).unwrap_err(),
            CheckError::NotReady
        ));
    }

    #[test]
    fn set_checked_attr_before_selection_just_stores_the_name() {
        let accessor = accessor();
        accessor.declare("area", AttrKind::Float);

        let mut plugin = ValueCheckerPlugin::new(accessor).unwrap();
        plugin.set_checked_attr("area").unwrap();
        plugin.set_data_type(0).unwrap();

        let mut record = record(&[("area", AttrValue::Float(1.0))]);
        assert!(plugin.process(&mut record).unwrap());
    }

    #[test]
    fn empty_property_values_change_nothing() {
        let mut plugin = ValueCheckerPlugin::new(accessor()).unwrap();
        plugin.set_checked_attr("").unwrap();
        plugin.set_result_attr("").unwrap();
        plugin.set_min("").unwrap();
        plugin.set_max("").unwrap();

        assert_eq!(plugin.checked_attr(), "region");
        assert_eq!(plugin.result_attr(), "defect");
        assert_eq!(plugin.min_value(), "0.0");
        assert_eq!(plugin.max_value(), "0.0");
    }

    #[test]
    fn set_min_before_selection_is_rejected() {
        let mut plugin = ValueCheckerPlugin::new(accessor()).unwrap();
        assert!(matches!(
            plugin.set_min("1.0").unwrap_err(),
            CheckError::NotReady
        ));
        // The stored text keeps its previous value.
        assert_eq!(plugin.min_value(), "0.0");
    }

    #[test]
    fn rejected_bound_text_keeps_the_previous_value() {
        let mut plugin = ValueCheckerPlugin::new(accessor()).unwrap();
        plugin.set_data_type(0).unwrap();
        plugin.set_min("1.0").unwrap();

        assert!(matches!(
            plugin.set_min("abc").unwrap_err(),
            CheckError::Parse { .. }
        ));
        assert_eq!(plugin.min_value(), "1.0");
    }

    #[test]
    fn works_with_an_accessor_inferred_from_a_record() {
        let mut rec = record(&[("region", AttrValue::Float(0.0))]);
        let plugin =
            ValueCheckerPlugin::from_config(accessor_for(&rec), &CheckerConfig::default())
                .unwrap();

        assert!(plugin.process(&mut rec).unwrap());
        assert_eq!(rec.get("defect"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn catalogue_is_exposed_for_hosts() {
        assert!(ValueCheckerPlugin::<SchemaAccessor>::catalogue().contains("[float64 0]"));
    }
}

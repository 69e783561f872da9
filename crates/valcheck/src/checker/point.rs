//! Two-axis point range checker.

use super::Checker;
use crate::attributes::{AccessMode, AttrHandle, AttrKind, AttributeAccessor, Point, Record};
use crate::error::{CheckError, Result};

/// Range checker for a 2-component point attribute.
///
/// Bounds are parsed from `"x,y"` text and each axis is compared
/// against its own min/max independently.
#[derive(Debug)]
pub struct PointChecker {
    handle: AttrHandle,
    min: Option<Point>,
    max: Option<Point>,
}

impl PointChecker {
    pub const TYPE_NAME: &'static str = "point2d";

    pub fn new(attr_name: &str, accessor: &dyn AttributeAccessor) -> Result<Self> {
        let handle = accessor.resolve(attr_name, AttrKind::Point, AccessMode::Read)?;
        Ok(Self {
            handle,
            min: None,
            max: None,
        })
    }
}

/// Parse `"x,y"` into a point. Exactly two comma-separated components,
/// whitespace around each tolerated.
fn parse_point(text: &str) -> Result<Point> {
    let parts: Vec<&str> = text.split(',').collect();
    if parts.len() != 2 {
        return Err(CheckError::Parse {
            text: text.to_string(),
            reason: format!("expected 2 comma-separated components, found {}", parts.len()),
        });
    }

    let x = parts[0].trim().parse::<f64>().map_err(|e| CheckError::Parse {
        text: text.to_string(),
        reason: format!("component 1: {e}"),
    })?;
    let y = parts[1].trim().parse::<f64>().map_err(|e| CheckError::Parse {
        text: text.to_string(),
        reason: format!("component 2: {e}"),
    })?;

    Ok(Point::new(x, y))
}

impl Checker for PointChecker {
    fn bind_attribute(&mut self, name: &str, accessor: &dyn AttributeAccessor) -> Result<()> {
        if name.is_empty() {
            return Ok(());
        }
        self.handle = accessor.resolve(name, AttrKind::Point, AccessMode::Read)?;
        Ok(())
    }

    fn set_min(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.min = Some(parse_point(text)?);
        Ok(())
    }

    fn set_max(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.max = Some(parse_point(text)?);
        Ok(())
    }

    fn in_limits(&self, accessor: &dyn AttributeAccessor, record: &Record) -> Result<bool> {
        let value = accessor.read(&self.handle, record)?;
        let p = value.as_point().ok_or_else(|| CheckError::Resolution {
            name: self.handle.name().to_string(),
            reason: format!("record holds {}, expected point", value.kind()),
        })?;

        let above_min = self.min.map_or(true, |min| p.x >= min.x && p.y >= min.y);
        let below_max = self.max.map_or(true, |max| p.x <= max.x && p.y <= max.y);
        Ok(above_min && below_max)
    }
}

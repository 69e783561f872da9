use crate::attributes::{AttrValue, Record, SchemaAccessor};

/// Build a record from name/value pairs.
pub fn record(values: &[(&str, AttrValue)]) -> Record {
    let mut record = Record::new();
    for (name, value) in values {
        record.set(*name, value.clone());
    }
    record
}

/// Build an accessor whose schema matches the given record.
pub fn accessor_for(record: &Record) -> SchemaAccessor {
    SchemaAccessor::from_record(record)
}

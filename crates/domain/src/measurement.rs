use std::collections::BTreeMap;

pub const MEASUREMENT_NAME: &str = "dnsmasq";

pub type FieldMap = BTreeMap<String, f64>;

pub type Tags = BTreeMap<String, String>;

/// One data point handed to a metrics sink at the end of a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    pub name: &'static str,
    pub fields: FieldMap,
    pub tags: Tags,
}

impl Measurement {
    pub fn new(fields: FieldMap, tags: Tags) -> Self {
        Self {
            name: MEASUREMENT_NAME,
            fields,
            tags,
        }
    }
}

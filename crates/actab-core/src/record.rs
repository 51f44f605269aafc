use crate::schema;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// One actuator component row of a template.
///
/// A record always carries a value for every schema field, empty string where
/// data is absent — there is no partially-written record. Values live in
/// schema order; named access goes through [`schema::field_index`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActuatorRecord {
    values: Vec<String>,
}

impl ActuatorRecord {
    pub fn new() -> Self {
        Self {
            values: vec![String::new(); schema::FIELDS.len()],
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        schema::field_index(key).map(|i| self.values[i].as_str())
    }

    pub fn get_at(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// Set a field by key. Unknown keys are ignored; returns whether the key
    /// named a schema field.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> bool {
        match schema::field_index(key) {
            Some(i) => {
                self.values[i] = value.into();
                true
            }
            None => false,
        }
    }

    pub fn set_at(&mut self, index: usize, value: impl Into<String>) {
        if index < self.values.len() {
            self.values[index] = value.into();
        }
    }

    pub fn name(&self) -> &str {
        &self.values[0]
    }

    /// Field values in schema order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Default for ActuatorRecord {
    fn default() -> Self {
        Self::new()
    }
}

// On disk a record is a JSON object keyed by field name, matching the
// templates.json layout. Missing keys deserialize to empty strings and
// unknown keys are dropped, so hand-edited files stay loadable.

impl Serialize for ActuatorRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(schema::FIELDS.len()))?;
        for (key, value) in schema::FIELDS.iter().zip(&self.values) {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ActuatorRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = ActuatorRecord;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of actuator field names to string values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut record = ActuatorRecord::new();
                while let Some((key, value)) = map.next_entry::<String, String>()? {
                    record.set(&key, value);
                }
                Ok(record)
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}

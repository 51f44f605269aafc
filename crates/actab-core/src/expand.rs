//! Template instantiation: placeholder substitution into output rows.

use crate::error::{ActabError, Result};
use crate::record::ActuatorRecord;
use crate::schema;
use serde::Serialize;
use std::collections::HashSet;

/// The (number, name) pair identifying one concrete actuator.
///
/// The id is kept as the literal digit string the user typed; `"030"` and
/// `"30"` are different ids. It is only ever displayed, never used
/// arithmetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstanceKey {
    id: String,
    name: String,
}

impl InstanceKey {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Result<Self> {
        let id = id.into();
        let name = name.into();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ActabError::InvalidInstanceId(id));
        }
        if name.trim().is_empty() {
            return Err(ActabError::EmptyInstanceName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// One 25-cell output row: the `Actuator` column followed by the schema
/// fields in order. Serializes as a plain array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRow(pub Vec<String>);

impl OutputRow {
    pub fn cells(&self) -> &[String] {
        &self.0
    }
}

/// The records of one template paired with the instance to generate.
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    pub records: &'a [ActuatorRecord],
    pub instance: InstanceKey,
}

/// Expand one record for one instance.
///
/// The `Actuator` column is the instance id with the underscore prefix;
/// every field gets each literal occurrence of the placeholder replaced with
/// the instance name. Plain substring replacement — a name containing regex
/// metacharacters must come through untouched.
pub fn expand(record: &ActuatorRecord, instance: &InstanceKey) -> OutputRow {
    let mut cells = Vec::with_capacity(schema::COLUMN_HEADERS.len());
    cells.push(format!("_{}", instance.id));
    for value in record.values() {
        cells.push(value.replace(schema::PLACEHOLDER, &instance.name));
    }
    OutputRow(cells)
}

/// Expand a batch of template groups, one output row per record per
/// instance, groups in given order and records in stored order.
///
/// All-or-nothing: a duplicate instance id anywhere in the batch rejects the
/// whole batch before any row is produced.
pub fn expand_batch(batch: &[Expansion<'_>]) -> Result<Vec<OutputRow>> {
    let mut seen = HashSet::new();
    for expansion in batch {
        if !seen.insert(expansion.instance.id()) {
            return Err(ActabError::DuplicateInstanceId(
                expansion.instance.id().to_string(),
            ));
        }
    }

    let mut rows = Vec::new();
    for expansion in batch {
        for record in expansion.records {
            rows.push(expand(record, &expansion.instance));
        }
    }
    tracing::debug!(groups = batch.len(), rows = rows.len(), "expanded batch");
    Ok(rows)
}

//! The fixed actuator field schema shared by import and export.
//!
//! Field position is the sole field identity: pasted rows are mapped onto
//! this order left-to-right, and output rows are emitted in this order with
//! the `Actuator` column prepended.

/// Placeholder substituted with the concrete actuator name at expansion time.
pub const PLACEHOLDER: &str = "{ActuatorName}";

/// Schema field keys, in column order. The leading record-identifier column
/// of a pasted row is not part of the schema.
pub const FIELDS: [&str; 24] = [
    "name",
    "index",
    "datatype",
    "prefix",
    "output",
    "out_descr",
    "input",
    "inp_descr",
    "alm0",
    "alm1",
    "alm0_descr_lang1",
    "alm0_descr_lang2",
    "alm0_descr_lang3",
    "alm1_descr_lang1",
    "alm1_descr_lang2",
    "alm1_descr_lang3",
    "alm0_procedure",
    "alm1_procedure",
    "alm0_bad",
    "alm1_bad",
    "alm0_cause",
    "alm1_cause",
    "alm0_action",
    "alm1_action",
];

/// Display labels for the 25 output columns: `Actuator` plus one per schema
/// field, matching the spreadsheet header row the tool targets.
pub const COLUMN_HEADERS: [&str; 25] = [
    "Actuator",
    "Name",
    "Index",
    "DataType",
    "Prefix",
    "Output",
    "Out.Descr.",
    "Input",
    "Inp.Descr.",
    "Alm 0",
    "Alm 1",
    "Alm 0 Descr. Language1",
    "Alm 0 Descr. Language2",
    "Alm 0 Descr. Language3",
    "Alm 1 Descr.Language1",
    "Alm 1 Descr.Language2",
    "Alm 1 Descr.Language3",
    "Alm0 Procedure",
    "Alm1 Procedure",
    "Alm0 BAD",
    "Alm1 BAD",
    "Alm0 Cause",
    "Alm1 Cause",
    "Alm0 Action",
    "Alm1 Action",
];

/// Schema position of a field key, if it is one.
pub fn field_index(key: &str) -> Option<usize> {
    FIELDS.iter().position(|k| *k == key)
}

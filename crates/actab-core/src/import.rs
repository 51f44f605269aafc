//! Free-text table importer.
//!
//! Pasted spreadsheet blocks arrive with arbitrary reflow: long cause/action
//! cells wrap onto extra visual lines and lose their tab alignment. The only
//! reliable "new row starts here" signal is the record-identifier convention,
//! an underscore followed by digits in the first column. [`reconstruct`]
//! regroups the paste into one logical line per record; [`parse`] maps each
//! logical line onto the field schema and rewrites axis names into the
//! reusable placeholder.

use crate::error::{ActabError, Result};
use crate::record::ActuatorRecord;
use crate::schema;
use regex::Regex;
use std::sync::OnceLock;

static MARKER_RE: OnceLock<Regex> = OnceLock::new();
static AXIS_NAME_RE: OnceLock<Regex> = OnceLock::new();
static AXIS_PREFIX_RE: OnceLock<Regex> = OnceLock::new();
static MULTISPACE_RE: OnceLock<Regex> = OnceLock::new();

/// Record-start marker: underscore followed by decimal digits.
fn marker_re() -> &'static Regex {
    MARKER_RE.get_or_init(|| Regex::new(r"^_\d+").unwrap())
}

/// Axis name anywhere in a string: `Axis`, one uppercase letter, then
/// lowercase letters or digits.
fn axis_name_re() -> &'static Regex {
    AXIS_NAME_RE.get_or_init(|| Regex::new(r"Axis[A-Z][a-z0-9]*").unwrap())
}

/// Axis name anchored at the start of a value (the `name` field heuristic).
fn axis_prefix_re() -> &'static Regex {
    AXIS_PREFIX_RE.get_or_init(|| Regex::new(r"^Axis[A-Z][a-z0-9]*").unwrap())
}

/// Two or more consecutive whitespace characters, a tab that lost itself in
/// the copy.
fn multispace_re() -> &'static Regex {
    MULTISPACE_RE.get_or_init(|| Regex::new(r"\s{2,}").unwrap())
}

/// Regroup raw pasted text into one logical line per actuator record.
///
/// Segments that start with the record marker open a new logical line;
/// anything else is a wrapped continuation of the previous one and is glued
/// back with a single space. Blank segments are dropped. Pure function of
/// its input.
pub fn reconstruct(raw_text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for segment in raw_text.lines() {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if marker_re().is_match(segment) {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current.push_str(segment);
        } else if current.is_empty() {
            // Continuation with no marker seen yet; keep it rather than lose
            // text, the acceptance filter in parse() decides its fate.
            current.push_str(segment);
        } else {
            current.push(' ');
            current.push_str(segment);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Parse logical lines into actuator records.
///
/// Order-preserving and infallible: a line that does not yield a usable
/// record (empty name, or nothing beyond the record id) is skipped, never an
/// error. Leniency here is the tool's contract — paste first, review the
/// mapping second.
pub fn parse<I>(lines: I) -> Vec<ActuatorRecord>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| parse_line(line.as_ref()))
        .collect()
}

/// Reconstruct and parse in one step.
///
/// Non-empty input that produces zero records is reported as
/// [`ActabError::EmptyImport`]; empty input is just an empty import.
pub fn import_text(raw_text: &str) -> Result<Vec<ActuatorRecord>> {
    let records = parse(reconstruct(raw_text));
    if records.is_empty() && !raw_text.trim().is_empty() {
        return Err(ActabError::EmptyImport);
    }
    Ok(records)
}

fn parse_line(line: &str) -> Option<ActuatorRecord> {
    let tokens = tokenize(line);
    if tokens.is_empty() {
        return None;
    }

    // The first token is the record id (`_30`); it is not a schema field.
    let fields = &tokens[1..];

    // A lone record id is not a component row.
    if fields.len() <= 1 {
        tracing::debug!(line, "skipping line without usable fields");
        return None;
    }

    let mut record = ActuatorRecord::new();
    for (i, token) in fields.iter().take(schema::FIELDS.len()).enumerate() {
        let value = if i == 0 {
            substitute_name(token)
        } else if schema::FIELDS[i].contains("_descr_lang") {
            axis_name_re()
                .replace_all(token, schema::PLACEHOLDER)
                .into_owned()
        } else {
            (*token).to_string()
        };
        record.set_at(i, value);
    }

    if record.name().is_empty() {
        tracing::debug!(line, "skipping line with empty name field");
        return None;
    }
    Some(record)
}

/// Split a logical line into trimmed, non-empty tokens.
///
/// Runs of two or more whitespace characters are collapsed into a single tab
/// first; spreadsheet copies sometimes degrade real tabs into space runs.
/// If any tab remains the line is tab-delimited, otherwise space-delimited.
fn tokenize(line: &str) -> Vec<String> {
    let normalized = multispace_re().replace_all(line, "\t");
    let split: Vec<&str> = if normalized.contains('\t') {
        normalized.split('\t').collect()
    } else {
        normalized.split(' ').collect()
    };
    split
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// The `name` field heuristic: an axis-name prefix becomes the placeholder,
/// keeping any suffix from the first underscore on.
///
/// `AxisRy1_MotionCfg` -> `{ActuatorName}_MotionCfg`, `AxisX` ->
/// `{ActuatorName}`. Deliberately different from the description-field
/// substitution, which replaces axis names anywhere in the string.
fn substitute_name(value: &str) -> String {
    if !axis_prefix_re().is_match(value) {
        return value.to_string();
    }
    match value.find('_') {
        Some(pos) => format!("{}{}", schema::PLACEHOLDER, &value[pos..]),
        None => schema::PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_merges_wrapped_continuations() {
        let lines = reconstruct("_30\tFoo\tBar\nextra words\n_31\tBaz");
        assert_eq!(lines, vec!["_30\tFoo\tBar extra words", "_31\tBaz"]);
    }

    #[test]
    fn reconstruct_drops_blank_segments() {
        let lines = reconstruct("\n  \n_30\tFoo\n\n_31\tBar\n\n");
        assert_eq!(lines, vec!["_30\tFoo", "_31\tBar"]);
    }

    #[test]
    fn reconstruct_of_empty_input_is_empty() {
        assert!(reconstruct("").is_empty());
        assert!(reconstruct("   \n\t\n").is_empty());
    }

    #[test]
    fn reconstruct_keeps_leading_continuation_without_marker() {
        let lines = reconstruct("stray text\n_30\tFoo");
        assert_eq!(lines, vec!["stray text", "_30\tFoo"]);
    }

    #[test]
    fn reconstruct_is_idempotent() {
        let raw = "_30\tFoo\tBar\nwrapped tail\n_31\tBaz\nmore tail\n";
        let once = reconstruct(raw);
        let again = reconstruct(&once.join("\n"));
        assert_eq!(once, again);
    }

    #[test]
    fn parse_maps_tokens_onto_schema_positions() {
        let records = parse(["_30\tValveA\t12\tBOOL\tP1"]);
        assert_eq!(records.len(), 1);
        let r = &records[0];
        assert_eq!(r.get("name"), Some("ValveA"));
        assert_eq!(r.get("index"), Some("12"));
        assert_eq!(r.get("datatype"), Some("BOOL"));
        assert_eq!(r.get("prefix"), Some("P1"));
        assert_eq!(r.get("output"), Some(""));
    }

    #[test]
    fn every_parsed_record_carries_the_full_schema() {
        let records = parse(["_30\tValveA\t12"]);
        assert_eq!(records[0].values().count(), schema::FIELDS.len());
    }

    #[test]
    fn axis_name_becomes_placeholder() {
        let records = parse(["_30\tAxisRy1\t12"]);
        assert_eq!(records[0].name(), "{ActuatorName}");
    }

    #[test]
    fn axis_name_keeps_suffix_from_first_underscore() {
        let records = parse(["_30\tAxisRy1_NotHomed\t12"]);
        assert_eq!(records[0].name(), "{ActuatorName}_NotHomed");
    }

    #[test]
    fn non_axis_name_passes_through() {
        let records = parse(["_30\tValve_Open\t12"]);
        assert_eq!(records[0].name(), "Valve_Open");
    }

    #[test]
    fn description_fields_substitute_axis_names_globally() {
        let mut fields = vec!["_30", "AxisRy", "12", "BOOL"];
        fields.resize(11, "-");
        fields.push("AxisRy Drive Error"); // alm0_descr_lang1
        let records = parse([fields.join("\t")]);
        assert_eq!(
            records[0].get("alm0_descr_lang1"),
            Some("{ActuatorName} Drive Error")
        );
    }

    #[test]
    fn non_description_fields_are_verbatim() {
        let fields = ["_30", "Pump", "1", "BOOL", "P", "Out", "AxisRy out"];
        let records = parse([fields.join("\t")]);
        // out_descr keeps the axis name, only the six _descr_lang fields
        // get the global substitution.
        assert_eq!(records[0].get("out_descr"), Some("AxisRy out"));
    }

    #[test]
    fn lone_record_id_yields_no_record() {
        assert!(parse(["_138"]).is_empty());
    }

    #[test]
    fn id_plus_single_field_yields_no_record() {
        assert!(parse(["_30\tOnlyName"]).is_empty());
    }

    #[test]
    fn space_runs_parse_like_tabs() {
        let tabbed = parse(["_30\tValveA\t12\tBOOL"]);
        let spaced = parse(["_30   ValveA    12  BOOL"]);
        assert_eq!(tabbed, spaced);
    }

    #[test]
    fn single_space_delimited_line_parses() {
        let records = parse(["_30 ValveA 12 BOOL"]);
        assert_eq!(records[0].get("datatype"), Some("BOOL"));
    }

    #[test]
    fn import_text_flags_unusable_input() {
        let err = import_text("_138\n_139\n").unwrap_err();
        assert!(matches!(err, ActabError::EmptyImport));
    }

    #[test]
    fn import_text_of_empty_input_is_ok_and_empty() {
        assert!(import_text("").unwrap().is_empty());
    }

    #[test]
    fn import_text_merges_then_parses() {
        let records = import_text("_30\tAxisX\t12\tBOOL\nwrapped\n_31\tAxisZ\t13\tBOOL").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name(), "{ActuatorName}");
        assert_eq!(records[1].get("index"), Some("13"));
    }
}

use crate::output::print_json;
use actab_core::expand::{expand_batch, Expansion, InstanceKey};
use actab_core::template::TemplateStore;
use actab_core::{export, io};
use anyhow::Context;
use std::path::Path;

pub fn run(
    dir: &Path,
    template_name: &str,
    actuators: &[String],
    out: Option<&Path>,
    no_header: bool,
    json: bool,
) -> anyhow::Result<()> {
    let store = TemplateStore::open(dir).context("failed to open template store")?;
    let template = store
        .get(template_name)
        .with_context(|| format!("template '{template_name}' not found"))?;

    let instances: Vec<InstanceKey> = actuators
        .iter()
        .map(|spec| parse_instance(spec))
        .collect::<anyhow::Result<_>>()?;

    let batch: Vec<Expansion<'_>> = instances
        .into_iter()
        .map(|instance| Expansion {
            records: &template.actuators,
            instance,
        })
        .collect();

    let rows = expand_batch(&batch)?;

    if json {
        print_json(&rows)?;
        return Ok(());
    }

    let text = export::tsv(&rows, !no_header);
    match out {
        Some(path) => {
            io::atomic_write(path, text.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote {} rows to {}", rows.len(), path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

/// Parse a `NUMBER:NAME` actuator argument.
fn parse_instance(spec: &str) -> anyhow::Result<InstanceKey> {
    let (id, name) = spec
        .split_once(':')
        .with_context(|| format!("invalid actuator '{spec}': expected NUMBER:NAME"))?;
    Ok(InstanceKey::new(id, name)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_number_colon_name() {
        let key = parse_instance("30:AxisZ").unwrap();
        assert_eq!(key.id(), "30");
        assert_eq!(key.name(), "AxisZ");
    }

    #[test]
    fn rejects_missing_separator() {
        assert!(parse_instance("30AxisZ").is_err());
    }

    #[test]
    fn rejects_non_numeric_id() {
        assert!(parse_instance("thirty:AxisZ").is_err());
    }
}

use crate::output::{print_json, print_table};
use actab_core::import::import_text;
use actab_core::template::{Template, TemplateStore};
use anyhow::Context;
use std::io::Read;
use std::path::Path;

pub fn run(
    dir: &Path,
    file: Option<&Path>,
    save: Option<&str>,
    description: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let raw = match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let records = import_text(&raw)?;

    if let Some(name) = save {
        let mut store = TemplateStore::open(dir).context("failed to open template store")?;
        let mut template = Template::new(name, description.unwrap_or_default())?;
        template.actuators = records.clone();
        store
            .save(template)
            .with_context(|| format!("failed to save template '{name}'"))?;
        if !json {
            println!("Saved template '{name}' with {} actuators", records.len());
        }
    }

    if json {
        print_json(&records)?;
        return Ok(());
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            vec![
                (i + 1).to_string(),
                r.name().to_string(),
                r.get("index").unwrap_or_default().to_string(),
                r.get("datatype").unwrap_or_default().to_string(),
            ]
        })
        .collect();
    print_table(&["#", "NAME", "INDEX", "DATATYPE"], rows);
    Ok(())
}

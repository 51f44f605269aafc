use crate::output::{print_json, print_table};
use actab_core::template::TemplateStore;
use anyhow::Context;
use clap::Subcommand;
use std::path::{Path, PathBuf};

#[derive(Subcommand)]
pub enum TemplateSubcommand {
    /// List all stored templates
    List,
    /// Show a template's records
    Show { name: String },
    /// Delete a template
    Delete { name: String },
    /// Export a template to a JSON file
    Export { name: String, file: PathBuf },
    /// Import templates from a JSON file (single template or whole store)
    Import { file: PathBuf },
}

pub fn run(dir: &Path, subcmd: TemplateSubcommand, json: bool) -> anyhow::Result<()> {
    match subcmd {
        TemplateSubcommand::List => list(dir, json),
        TemplateSubcommand::Show { name } => show(dir, &name, json),
        TemplateSubcommand::Delete { name } => delete(dir, &name, json),
        TemplateSubcommand::Export { name, file } => export(dir, &name, &file),
        TemplateSubcommand::Import { file } => import(dir, &file, json),
    }
}

fn open(dir: &Path) -> anyhow::Result<TemplateStore> {
    TemplateStore::open(dir).context("failed to open template store")
}

fn list(dir: &Path, json: bool) -> anyhow::Result<()> {
    let store = open(dir)?;

    if json {
        let summaries: Vec<_> = store
            .list()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "actuators": t.actuators.len(),
                    "last_modified": t.last_modified,
                })
            })
            .collect();
        print_json(&summaries)?;
        return Ok(());
    }

    if store.is_empty() {
        println!("No templates yet.");
        return Ok(());
    }

    let rows: Vec<Vec<String>> = store
        .list()
        .map(|t| {
            vec![
                t.name.clone(),
                t.actuators.len().to_string(),
                t.last_modified
                    .map(|m| m.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_default(),
                t.description.clone(),
            ]
        })
        .collect();
    print_table(&["NAME", "ACTUATORS", "MODIFIED", "DESCRIPTION"], rows);
    Ok(())
}

fn show(dir: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let store = open(dir)?;
    let template = store
        .get(name)
        .with_context(|| format!("template '{name}' not found"))?;

    if json {
        print_json(template)?;
        return Ok(());
    }

    println!("Template: {}", template.name);
    if !template.description.is_empty() {
        println!("Description: {}", template.description);
    }
    println!("Components per actuator: {}", template.actuators.len());
    for (i, record) in template.actuators.iter().enumerate() {
        let index = record.get("index").unwrap_or_default();
        let name = if record.name().is_empty() {
            "Unnamed"
        } else {
            record.name()
        };
        println!("  {}. {} (Index: {})", i + 1, name, index);
    }
    Ok(())
}

fn delete(dir: &Path, name: &str, json: bool) -> anyhow::Result<()> {
    let mut store = open(dir)?;
    store.delete(name)?;
    if json {
        print_json(&serde_json::json!({ "deleted": name }))?;
    } else {
        println!("Deleted template '{name}'");
    }
    Ok(())
}

fn export(dir: &Path, name: &str, file: &Path) -> anyhow::Result<()> {
    let store = open(dir)?;
    store
        .export_file(name, file)
        .with_context(|| format!("failed to export template '{name}'"))?;
    println!("Exported template '{}' to {}", name, file.display());
    Ok(())
}

fn import(dir: &Path, file: &Path, json: bool) -> anyhow::Result<()> {
    let mut store = open(dir)?;
    let imported = store
        .import_file(file)
        .with_context(|| format!("failed to import {}", file.display()))?;
    if json {
        print_json(&imported)?;
    } else {
        println!("Imported {} template(s): {}", imported.len(), imported.join(", "));
    }
    Ok(())
}

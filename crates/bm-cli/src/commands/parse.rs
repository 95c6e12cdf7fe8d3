//! Parse a notebook path into mesh segments

use crate::cli::{GlobalArgs, ParseArgs};
use anyhow::Result;
use bm_core::{parse_configured_path, parse_mesh_path, FsConfigProvider, ParsedPath};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

pub fn execute(args: &ParseArgs, global: &GlobalArgs) -> Result<()> {
    let provider = FsConfigProvider::discover(Path::new(&global.dir))?;
    let config = provider.config();

    let has_configured_regexp = config
        .map(|c| c.naming.path_regexp.is_some())
        .unwrap_or(false);

    if has_configured_regexp && !args.fixed {
        match parse_configured_path(&args.path, config) {
            Some(groups) => println!("{}", render_groups(&groups)?),
            None => {
                log::warn!("path does not match the configured path_regexp: {}", args.path);
                println!("null");
            }
        }
        return Ok(());
    }

    match parse_mesh_path(&args.path) {
        ParsedPath::Matched(mesh) => println!("{}", serde_json::to_string_pretty(&mesh)?),
        ParsedPath::NotInMesh => {
            log::warn!("path is outside the mesh folder convention: {}", args.path);
            println!("null");
        }
    }
    Ok(())
}

/// Render capture groups with keys sorted, for stable, diffable output.
fn render_groups(groups: &HashMap<String, String>) -> Result<String> {
    let sorted: BTreeMap<&str, &str> = groups
        .iter()
        .map(|(k, v)| (k.as_str(), v.as_str()))
        .collect();
    Ok(serde_json::to_string_pretty(&sorted)?)
}

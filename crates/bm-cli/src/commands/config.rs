//! Show the discovered configuration

use crate::cli::{ConfigArgs, GlobalArgs};
use anyhow::Result;
use bm_core::FsConfigProvider;
use std::path::Path;

pub fn execute(_args: &ConfigArgs, global: &GlobalArgs) -> Result<()> {
    let provider = FsConfigProvider::discover(Path::new(&global.dir))?;
    match (provider.path(), provider.config()) {
        (Some(path), Some(config)) => {
            println!("# {}", path.display());
            print!("{}", serde_yaml::to_string(config)?);
        }
        _ => {
            println!("no .brickopscfg configuration found (fixed mesh convention mode)");
        }
    }
    Ok(())
}

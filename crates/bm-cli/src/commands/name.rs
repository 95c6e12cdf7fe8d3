//! Resolve an environment-aware resource name

use crate::cli::{GlobalArgs, NameArgs, ResourceKind};
use anyhow::{bail, Result};
use bm_core::context::{WIDGET_GIT_BRANCH, WIDGET_GIT_COMMIT, WIDGET_PIPELINE_ENV};
use bm_core::{
    catalog_name, dbname, job_name, pipeline_name, schema_name, table_name, FsConfigProvider,
    RunContext,
};
use std::collections::HashMap;
use std::path::Path;

pub fn execute(args: &NameArgs, global: &GlobalArgs) -> Result<()> {
    let provider = FsConfigProvider::discover(Path::new(&global.dir))?;
    let config = provider.config();
    let ctx = run_context(args);
    let env = args.env.as_deref();

    let name = match args.resource {
        ResourceKind::Catalog => {
            let name = catalog_name(&ctx, config, env);
            if name.is_empty() {
                log::warn!(
                    "notebook path is outside the mesh convention, catalog degrades to empty: {}",
                    args.notebook_path
                );
            }
            name
        }
        ResourceKind::Schema => {
            let (db, cat) = db_and_cat(args)?;
            schema_name(&ctx, config, db, cat, env)
        }
        ResourceKind::Db => {
            let (db, cat) = db_and_cat(args)?;
            dbname(&ctx, config, db, cat, env)
        }
        ResourceKind::Table => {
            let (db, cat) = db_and_cat(args)?;
            let Some(table) = args.table.as_deref() else {
                bail!("--table is required for table names");
            };
            table_name(&ctx, config, db, cat, table, env)
        }
        ResourceKind::Job => job_name(&ctx, config, env),
        ResourceKind::Pipeline => pipeline_name(&ctx, config, env),
    };
    println!("{name}");
    Ok(())
}

fn db_and_cat(args: &NameArgs) -> Result<(&str, &str)> {
    match (args.db.as_deref(), args.cat.as_deref()) {
        (Some(db), Some(cat)) => Ok((db, cat)),
        _ => bail!("--db and --cat are required for this resource"),
    }
}

fn run_context(args: &NameArgs) -> RunContext {
    let mut widgets = HashMap::new();
    widgets.insert(WIDGET_GIT_BRANCH.to_string(), args.branch.clone());
    widgets.insert(WIDGET_GIT_COMMIT.to_string(), args.commit.clone());
    if let Some(env) = &args.pipeline_env {
        widgets.insert(WIDGET_PIPELINE_ENV.to_string(), env.clone());
    }
    RunContext {
        notebook_path: args.notebook_path.clone(),
        username: args.username.clone(),
        widgets,
    }
}

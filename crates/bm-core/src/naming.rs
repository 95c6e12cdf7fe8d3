//! Environment-aware resource naming.
//!
//! Names combine parsed mesh path segments with run-time identity so that
//! concurrent developer environments never collide on storage or compute
//! resources, while prod keeps clean convention names. Every function here
//! is a pure function of its inputs: no retained state, no clock, no
//! counters, so repeated calls with an unchanged context yield byte-identical
//! output.

use crate::config::{Config, NameFormat};
use crate::context::RunContext;
use crate::mesh_path::{parse_mesh_path, ParsedPath};
use crate::re_path::parse_configured_path;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

pub const PROD: &str = "prod";

/// Environment name assumed for a personal (`@`-bearing) username when
/// neither an explicit env nor a `pipeline_env` widget is present.
const DEFAULT_DEV_ENV: &str = "dev";

const PIPELINE_SUFFIX: &str = "_dlt";

/// Environment classification for a naming call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Env {
    Prod,
    NonProd(String),
}

impl Env {
    pub fn name(&self) -> &str {
        match self {
            Env::Prod => PROD,
            Env::NonProd(name) => name,
        }
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Env::Prod)
    }

    fn from_name(name: &str) -> Self {
        if name == PROD {
            Env::Prod
        } else {
            Env::NonProd(name.to_string())
        }
    }
}

/// Resource kinds the engine can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Catalog,
    Db,
    Job,
    Pipeline,
}

impl Resource {
    fn configured_format<'a>(&self, config: Option<&'a Config>) -> Option<&'a NameFormat> {
        let naming = &config?.naming;
        match self {
            Resource::Catalog => naming.catalog.as_ref(),
            Resource::Db => naming.db.as_ref(),
            Resource::Job => naming.job.as_ref(),
            Resource::Pipeline => naming.pipeline.as_ref(),
        }
    }
}

/// Resolve the effective environment for a naming call.
///
/// An explicit `env` argument wins. Otherwise the `pipeline_env` widget
/// decides; in its absence an `@`-less username means a service principal,
/// i.e. prod, and a personal username falls back to a dev environment.
pub fn resolve_env(ctx: &RunContext, env: Option<&str>) -> Env {
    if let Some(name) = env {
        return Env::from_name(name);
    }
    if let Some(name) = ctx.pipeline_env() {
        return Env::from_name(name);
    }
    if ctx.username.contains('@') {
        Env::NonProd(DEFAULT_DEV_ENV.to_string())
    } else {
        Env::Prod
    }
}

/// Wrap `name` in backticks when it contains characters outside the
/// letter/digit/underscore set; safe segments stay unquoted. Each segment of
/// a qualified name is escaped independently by its caller.
pub fn escape_sql_name(name: &str) -> String {
    if name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        name.to_string()
    } else {
        format!("`{name}`")
    }
}

/// Local part of the username: everything before the first `@`, or the raw
/// username when there is none.
fn username_local(ctx: &RunContext) -> &str {
    ctx.username.split('@').next().unwrap_or("")
}

/// Branch name with every `/`, `_`, and whitespace character removed, so the
/// result is a single safe identifier segment.
fn sanitize_branch(branch: &str) -> String {
    branch
        .chars()
        .filter(|c| *c != '/' && *c != '_' && !c.is_whitespace())
        .collect()
}

/// First 8 characters of the commit hash.
fn short_sha(commit: &str) -> String {
    commit.chars().take(8).collect()
}

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_re() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("valid regex literal"))
}

/// Substitute `{key}` placeholders from `vars`; unknown keys render empty.
fn render(template: &str, vars: &HashMap<String, String>) -> String {
    placeholder_re()
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).cloned().unwrap_or_default()
        })
        .into_owned()
}

/// Build the substitution map for format templates.
///
/// Path fields come from the fixed-schema parser, overlaid by any named
/// groups the configurable parser produced, so custom schemas can introduce
/// fields like `{activity}` without losing the convention defaults. A path
/// outside the mesh convention contributes empty segments, never an error.
fn render_vars(
    ctx: &RunContext,
    config: Option<&Config>,
    env: &Env,
    db: Option<&str>,
    cat: Option<&str>,
) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for key in ["org", "domain", "project", "flow"] {
        vars.insert(key.to_string(), String::new());
    }
    if let ParsedPath::Matched(mesh) = parse_mesh_path(&ctx.notebook_path) {
        if let Some(org) = mesh.org {
            vars.insert("org".to_string(), org);
        }
        vars.insert("domain".to_string(), mesh.domain);
        vars.insert("project".to_string(), mesh.project);
        vars.insert("flow".to_string(), mesh.flow);
    }
    if let Some(groups) = parse_configured_path(&ctx.notebook_path, config) {
        vars.extend(groups);
    }
    vars.insert("env".to_string(), env.name().to_string());
    vars.insert("username".to_string(), username_local(ctx).to_string());
    vars.insert("gitbranch".to_string(), sanitize_branch(ctx.git_branch()));
    vars.insert("gitshortref".to_string(), short_sha(ctx.git_commit()));
    if let Some(db) = db {
        vars.insert("db".to_string(), db.to_string());
    }
    if let Some(cat) = cat {
        vars.insert("catalog".to_string(), cat.to_string());
    }
    vars
}

/// Pick the format template for a resource in the given environment class.
///
/// Configured formats override the convention defaults per key; with no
/// configured pipeline format the pipeline template is the job template with
/// a `_dlt` suffix, which keeps `pipeline_name == job_name + "_dlt"` as an
/// invariant of the default convention.
fn template_for(resource: Resource, config: Option<&Config>, prod: bool) -> String {
    if let Some(format) = resource.configured_format(config) {
        let configured = if prod { &format.prod } else { &format.other };
        if let Some(template) = configured {
            return template.clone();
        }
    }
    match (resource, prod) {
        (Resource::Catalog, _) => "{domain}".to_string(),
        (Resource::Db, true) => "{db}".to_string(),
        (Resource::Db, false) => "{env}_{username}_{gitbranch}_{gitshortref}_{db}".to_string(),
        (Resource::Job, true) => "{domain}_{project}_{env}".to_string(),
        (Resource::Job, false) => {
            "{domain}_{project}_{env}_{username}_{gitbranch}_{gitshortref}".to_string()
        }
        (Resource::Pipeline, _) => {
            format!("{}{}", template_for(Resource::Job, config, prod), PIPELINE_SUFFIX)
        }
    }
}

/// Resolve a resource name from the notebook path and run-time context.
pub fn name_from_path(
    resource: Resource,
    ctx: &RunContext,
    config: Option<&Config>,
    env: Option<&str>,
) -> String {
    resolve(resource, ctx, config, env, None, None)
}

fn resolve(
    resource: Resource,
    ctx: &RunContext,
    config: Option<&Config>,
    env: Option<&str>,
    db: Option<&str>,
    cat: Option<&str>,
) -> String {
    let env = resolve_env(ctx, env);
    let vars = render_vars(ctx, config, &env, db, cat);
    let template = template_for(resource, config, env.is_prod());
    render(&template, &vars)
}

/// Catalog name: the parsed `domain` segment by default
/// (environment-invariant), or a configured `naming.catalog` format. Paths
/// outside the mesh convention degrade to `""`.
pub fn catalog_name(ctx: &RunContext, config: Option<&Config>, env: Option<&str>) -> String {
    name_from_path(Resource::Catalog, ctx, config, env)
}

/// Unqualified schema/database name: `db` alone in prod, prefixed with the
/// environment and the disambiguation suffix otherwise.
pub fn schema_name(
    ctx: &RunContext,
    config: Option<&Config>,
    db: &str,
    cat: &str,
    env: Option<&str>,
) -> String {
    resolve(Resource::Db, ctx, config, env, Some(db), Some(cat))
}

/// Catalog-qualified schema name, each segment escaped independently.
pub fn dbname(
    ctx: &RunContext,
    config: Option<&Config>,
    db: &str,
    cat: &str,
    env: Option<&str>,
) -> String {
    format!(
        "{}.{}",
        escape_sql_name(cat),
        escape_sql_name(&schema_name(ctx, config, db, cat, env))
    )
}

/// Fully qualified `catalog.schema.table` name, each segment escaped
/// independently.
pub fn table_name(
    ctx: &RunContext,
    config: Option<&Config>,
    db: &str,
    cat: &str,
    tbl: &str,
    env: Option<&str>,
) -> String {
    format!(
        "{}.{}",
        dbname(ctx, config, db, cat, env),
        escape_sql_name(tbl)
    )
}

/// Job name for the current mesh location and environment.
pub fn job_name(ctx: &RunContext, config: Option<&Config>, env: Option<&str>) -> String {
    name_from_path(Resource::Job, ctx, config, env)
}

/// Pipeline name: the job name with a `_dlt` suffix under the default
/// convention; a configured `naming.pipeline` format takes over verbatim.
pub fn pipeline_name(ctx: &RunContext, config: Option<&Config>, env: Option<&str>) -> String {
    name_from_path(Resource::Pipeline, ctx, config, env)
}

#[cfg(test)]
#[path = "naming_test.rs"]
mod tests;

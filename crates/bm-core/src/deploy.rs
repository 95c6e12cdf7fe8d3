//! Pipeline deployment configuration assembly.
//!
//! Builds the deploy-config object submitted (by external tooling) to the
//! pipeline deployment API. The update path is an explicit whitelist
//! ([`PipelineConfigUpdate`]): unknown keys fail at parse time instead of
//! being silently ignored. No network code lives here.

use crate::config::Config;
use crate::context::RunContext;
use crate::error::{CoreError, CoreResult};
use crate::naming::{catalog_name, escape_sql_name, schema_name};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the user-supplied `pipeline_tasks` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineTask {
    pub pipeline_key: String,
    pub db: String,
}

/// A notebook library reference in the deployment payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookLibrary {
    pub notebook: NotebookPath,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotebookPath {
    pub path: String,
}

/// Pipeline deployment configuration.
///
/// `None` fields are skipped during serialization so absent values are not
/// sent to the deployment API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub edition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub development: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    pub data_sampling: bool,
    pub continuous: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    pub photon: bool,
    pub pipeline_type: String,
    pub libraries: Vec<NotebookLibrary>,
    pub serverless: bool,
    pub tags: Map<String, Value>,
    pub parameters: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pipeline_tasks: Option<Vec<PipelineTask>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    pub policy_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub run_as: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_source: Option<Value>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            name: String::new(),
            edition: "ADVANCED".to_string(),
            catalog: None,
            development: None,
            schema: None,
            data_sampling: false,
            continuous: false,
            channel: Some("CURRENT".to_string()),
            photon: true,
            pipeline_type: "WORKSPACE".to_string(),
            libraries: Vec::new(),
            serverless: true,
            tags: Map::new(),
            parameters: Vec::new(),
            pipeline_tasks: Some(Vec::new()),
            schedule: None,
            policy_name: "dlt_default_policy".to_string(),
            run_as: None,
            git_source: None,
        }
    }
}

/// Whitelisted partial update for [`PipelineConfig`].
///
/// Every mutable field appears here as an `Option`; `deny_unknown_fields`
/// rejects anything else when the update is deserialized from user config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfigUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub edition: Option<String>,
    #[serde(default)]
    pub catalog: Option<String>,
    #[serde(default)]
    pub development: Option<bool>,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub data_sampling: Option<bool>,
    #[serde(default)]
    pub continuous: Option<bool>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub photon: Option<bool>,
    #[serde(default)]
    pub pipeline_type: Option<String>,
    #[serde(default)]
    pub libraries: Option<Vec<NotebookLibrary>>,
    #[serde(default)]
    pub serverless: Option<bool>,
    #[serde(default)]
    pub tags: Option<Map<String, Value>>,
    #[serde(default)]
    pub parameters: Option<Vec<Value>>,
    #[serde(default)]
    pub pipeline_tasks: Option<Vec<PipelineTask>>,
    #[serde(default)]
    pub schedule: Option<Value>,
    #[serde(default)]
    pub policy_name: Option<String>,
    #[serde(default)]
    pub run_as: Option<Value>,
    #[serde(default)]
    pub git_source: Option<Value>,
}

impl PipelineConfig {
    /// Apply a whitelisted partial update; unset fields are left untouched.
    pub fn update(&mut self, update: PipelineConfigUpdate) {
        let PipelineConfigUpdate {
            name,
            edition,
            catalog,
            development,
            schema,
            data_sampling,
            continuous,
            channel,
            photon,
            pipeline_type,
            libraries,
            serverless,
            tags,
            parameters,
            pipeline_tasks,
            schedule,
            policy_name,
            run_as,
            git_source,
        } = update;
        if let Some(v) = name {
            self.name = v;
        }
        if let Some(v) = edition {
            self.edition = v;
        }
        if let Some(v) = catalog {
            self.catalog = Some(v);
        }
        if let Some(v) = development {
            self.development = Some(v);
        }
        if let Some(v) = schema {
            self.schema = Some(v);
        }
        if let Some(v) = data_sampling {
            self.data_sampling = v;
        }
        if let Some(v) = continuous {
            self.continuous = v;
        }
        if let Some(v) = channel {
            self.channel = Some(v);
        }
        if let Some(v) = photon {
            self.photon = v;
        }
        if let Some(v) = pipeline_type {
            self.pipeline_type = v;
        }
        if let Some(v) = libraries {
            self.libraries = v;
        }
        if let Some(v) = serverless {
            self.serverless = v;
        }
        if let Some(v) = tags {
            self.tags = v;
        }
        if let Some(v) = parameters {
            self.parameters = v;
        }
        if let Some(v) = pipeline_tasks {
            self.pipeline_tasks = Some(v);
        }
        if let Some(v) = schedule {
            self.schedule = Some(v);
        }
        if let Some(v) = policy_name {
            self.policy_name = v;
        }
        if let Some(v) = run_as {
            self.run_as = Some(v);
        }
        if let Some(v) = git_source {
            self.git_source = Some(v);
        }
    }
}

/// Enrich a pipeline config from the first `pipeline_tasks` entry and the
/// run-time context.
///
/// Sets the target catalog from the parsed mesh path, the target schema via
/// the naming engine, development mode for every env except prod, and a
/// single notebook library next to the running notebook. The pipeline
/// runtime does not support git refs, so the library must use the absolute
/// notebook folder path.
pub fn enrich_tasks(
    mut pipeline: PipelineConfig,
    ctx: &RunContext,
    config: Option<&Config>,
    env: &str,
) -> CoreResult<PipelineConfig> {
    let task = pipeline
        .pipeline_tasks
        .take()
        .and_then(|mut tasks| {
            if tasks.is_empty() {
                None
            } else {
                Some(tasks.remove(0))
            }
        })
        .ok_or_else(|| CoreError::PipelineConfigInvalid {
            message: "pipeline_tasks must contain at least one task".to_string(),
        })?;

    let cat = escape_sql_name(&catalog_name(ctx, config, Some(env)));
    pipeline.schema = Some(schema_name(ctx, config, &task.db, &cat, Some(env)));
    pipeline.catalog = Some(cat);
    pipeline.development = Some(env != "prod");

    // chip off the notebook name and place the pipeline notebook in its folder
    let base_nb_path = ctx
        .notebook_path
        .rsplit_once('/')
        .map(|(dir, _)| dir)
        .unwrap_or("");
    pipeline.libraries = vec![NotebookLibrary {
        notebook: NotebookPath {
            path: format!("{base_nb_path}/{}", task.pipeline_key),
        },
    }];
    Ok(pipeline)
}

#[cfg(test)]
#[path = "deploy_test.rs"]
mod tests;

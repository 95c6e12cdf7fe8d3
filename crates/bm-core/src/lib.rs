//! bm-core - Core library for Brickmesh
//!
//! Naming-convention and configuration-resolution helpers for a data mesh
//! layered on a notebook execution environment: mesh path parsing
//! (fixed-schema and user-configurable), environment-aware resource naming,
//! and pipeline deploy-config assembly.

pub mod config;
pub mod context;
pub mod deploy;
pub mod error;
pub mod mesh_path;
pub mod naming;
pub mod re_path;

pub use config::{Config, FsConfigProvider, NameFormat, NamingConfig};
pub use context::RunContext;
pub use deploy::{enrich_tasks, PipelineConfig, PipelineConfigUpdate, PipelineTask};
pub use error::{CoreError, CoreResult};
pub use mesh_path::{parse_mesh_path, MeshPath, ParsedPath};
pub use naming::{
    catalog_name, dbname, escape_sql_name, job_name, name_from_path, pipeline_name, resolve_env,
    schema_name, table_name, Env, Resource,
};
pub use re_path::parse_configured_path;

//! Fixed-schema mesh path parser.
//!
//! Mesh notebooks live under
//! `domains/<domain>/projects/<project>/flows/<flow>`, optionally prefixed by
//! `org/<org>`, with `explore` (optionally `explore/ml` or `explore/prep`)
//! accepted in place of `flows`. Paths outside the convention are a
//! legitimate state, reported as [`ParsedPath::NotInMesh`] rather than an
//! error, e.g. for a dbname call run outside the mesh structure where mesh
//! names are not used.

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Segments extracted from a mesh-convention path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshPath {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org: Option<String>,
    pub domain: String,
    pub project: String,
    pub flow: String,
}

/// Outcome of fixed-schema parsing.
///
/// `NotInMesh` is a normal result, not a failure; the naming engine maps it
/// to empty segments so composed names degrade instead of aborting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum ParsedPath {
    Matched(MeshPath),
    NotInMesh,
}

impl ParsedPath {
    pub fn mesh(&self) -> Option<&MeshPath> {
        match self {
            ParsedPath::Matched(mesh) => Some(mesh),
            ParsedPath::NotInMesh => None,
        }
    }

    pub fn is_in_mesh(&self) -> bool {
        matches!(self, ParsedPath::Matched(_))
    }
}

static MESH_RE: OnceLock<Regex> = OnceLock::new();
static ORG_MESH_RE: OnceLock<Regex> = OnceLock::new();

fn mesh_re() -> &'static Regex {
    MESH_RE.get_or_init(|| {
        Regex::new(
            r"(?i).*/domains/(?P<domain>[^/]+)/projects/(?P<project>[^/]+)/(?:flows|explore(?:/ml|/prep)?)/(?P<flow>[^/]+)/.+",
        )
        .expect("valid regex literal")
    })
}

fn org_mesh_re() -> &'static Regex {
    ORG_MESH_RE.get_or_init(|| {
        Regex::new(
            r"(?i).*/org/(?P<org>[^/]+)/domains/(?P<domain>[^/]+)/projects/(?P<project>[^/]+)/(?:flows|explore(?:/ml|/prep)?)/(?P<flow>[^/]+)/.+",
        )
        .expect("valid regex literal")
    })
}

/// Parse `path` against the fixed mesh folder convention.
///
/// The org-qualified pattern is selected by the literal segment `/org/`; the
/// two patterns are mutually exclusive. Matching is case-insensitive in the
/// convention keywords while the captured segments keep their original case.
/// Total over all inputs: never panics, never errors.
pub fn parse_mesh_path(path: &str) -> ParsedPath {
    let re = if path.contains("/org/") {
        org_mesh_re()
    } else {
        mesh_re()
    };
    let Some(caps) = re.captures(path) else {
        log::debug!("path outside mesh convention: {path}");
        return ParsedPath::NotInMesh;
    };
    let group = |name: &str| caps.name(name).map(|m| m.as_str().to_string());
    // the named groups are mandatory in both patterns; stay total regardless
    match (group("domain"), group("project"), group("flow")) {
        (Some(domain), Some(project), Some(flow)) => ParsedPath::Matched(MeshPath {
            org: group("org"),
            domain,
            project,
            flow,
        }),
        _ => ParsedPath::NotInMesh,
    }
}

#[cfg(test)]
#[path = "mesh_path_test.rs"]
mod tests;

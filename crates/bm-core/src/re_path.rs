//! User-configurable path parser driven by `naming.path_regexp`.
//!
//! A generic named-capture engine, decoupled from mesh-specific semantics:
//! whatever groups the configured pattern names are returned verbatim and
//! the caller decides which fields are meaningful.

use crate::config::Config;
use regex::Regex;
use std::collections::HashMap;

/// Parse `path` with the regex configured under `naming.path_regexp`.
///
/// Every failure mode returns `None`: no config, no `path_regexp` key, an
/// invalid pattern, or a non-matching path. Bad configuration degrades the
/// naming call instead of aborting it; an invalid pattern is additionally
/// logged as an error. On success the map holds exactly the named capture
/// groups defined by the pattern; a group that did not participate in the
/// match maps to the empty string, so the result is never partial.
pub fn parse_configured_path(
    path: &str,
    config: Option<&Config>,
) -> Option<HashMap<String, String>> {
    let Some(config) = config else {
        log::debug!("no config found for configurable path parsing");
        return None;
    };
    let Some(pattern) = config.naming.path_regexp.as_deref() else {
        log::debug!("no naming.path_regexp defined in config");
        return None;
    };
    // configured patterns are prefix matches: anchored at the start of the
    // path, open at the end
    let re = match Regex::new(&format!("^(?:{pattern})")) {
        Ok(re) => re,
        Err(err) => {
            log::error!("invalid path_regexp pattern: {err}");
            return None;
        }
    };
    let Some(caps) = re.captures(path) else {
        log::debug!("path did not match configurable regex: {pattern}");
        return None;
    };
    Some(
        re.capture_names()
            .flatten()
            .map(|name| {
                let value = caps.name(name).map(|m| m.as_str()).unwrap_or("");
                (name.to_string(), value.to_string())
            })
            .collect(),
    )
}

#[cfg(test)]
#[path = "re_path_test.rs"]
mod tests;

use super::*;
use crate::config::NamingConfig;

fn config_with_regexp(pattern: &str) -> Config {
    Config {
        naming: NamingConfig {
            path_regexp: Some(pattern.to_string()),
            ..NamingConfig::default()
        },
    }
}

const MONOREPO_REGEX: &str = r"/shared/monorepo/orgs/(?P<org>[^/]+)/domains/(?P<domain>[^/]+)/projects/(?P<project>[^/]+)/(?P<activity>[^/]+)/(?P<flowtype>[^/]+)/(?P<flow>[^/]+)";

#[test]
fn test_matching_path_returns_all_named_groups() {
    let config = config_with_regexp(MONOREPO_REGEX);
    let groups = parse_configured_path(
        "/shared/monorepo/orgs/acme/domains/analytics/projects/sales/Flow/prep/load_data",
        Some(&config),
    )
    .unwrap();
    assert_eq!(groups.len(), 6);
    assert_eq!(groups["org"], "acme");
    assert_eq!(groups["domain"], "analytics");
    assert_eq!(groups["project"], "sales");
    assert_eq!(groups["activity"], "Flow");
    assert_eq!(groups["flowtype"], "prep");
    assert_eq!(groups["flow"], "load_data");
}

#[test]
fn test_alternate_schema_with_custom_group_names() {
    let config = config_with_regexp(r".*/pkg/(?P<pkg>[^/]+)/(?P<area>[^/]+)/(?P<job>[^/]+)");
    let groups = parse_configured_path("/somewhere/pkg/core/logging/myjob", Some(&config)).unwrap();
    assert_eq!(groups["pkg"], "core");
    assert_eq!(groups["area"], "logging");
    assert_eq!(groups["job"], "myjob");
}

#[test]
fn test_non_matching_path_returns_none() {
    let config = config_with_regexp(MONOREPO_REGEX);
    assert_eq!(
        parse_configured_path("/some/other/path/that/does/not/match", Some(&config)),
        None
    );
}

#[test]
fn test_match_is_anchored_at_path_start() {
    let config = config_with_regexp(r"/pkg/(?P<pkg>[^/]+)/(?P<job>[^/]+)");
    // would match with search semantics, must not with prefix semantics
    assert_eq!(
        parse_configured_path("/somewhere/pkg/core/myjob", Some(&config)),
        None
    );
    assert!(parse_configured_path("/pkg/core/myjob", Some(&config)).is_some());
}

#[test]
fn test_no_config_returns_none() {
    assert_eq!(parse_configured_path("/any/path", None), None);
}

#[test]
fn test_config_without_path_regexp_returns_none() {
    let config = Config::default();
    assert_eq!(parse_configured_path("/any/path", Some(&config)), None);
}

#[test]
fn test_invalid_pattern_returns_none_without_panicking() {
    let config = config_with_regexp("(");
    assert_eq!(parse_configured_path("/any/path", Some(&config)), None);
}

#[test]
fn test_result_contains_every_defined_group() {
    // a group that did not participate in the match is still present, mapped
    // to the empty string, so the result is never a partial mapping
    let config = config_with_regexp(r"/a/(?P<first>[^/]+)(?:/(?P<second>[^/]+))?");
    let groups = parse_configured_path("/a/only", Some(&config)).unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups["first"], "only");
    assert_eq!(groups["second"], "");
}

#[test]
fn test_pattern_without_named_groups_yields_empty_map() {
    let config = config_with_regexp(r"/a/[^/]+");
    let groups = parse_configured_path("/a/x", Some(&config)).unwrap();
    assert!(groups.is_empty());
}

use super::*;
use crate::config::NamingConfig;
use crate::context::{
    WIDGET_GIT_BRANCH, WIDGET_GIT_COMMIT, WIDGET_GIT_URL, WIDGET_PIPELINE_ENV,
};

fn run_context() -> RunContext {
    let mut widgets = HashMap::new();
    widgets.insert(WIDGET_GIT_URL.to_string(), "git_url".to_string());
    widgets.insert(WIDGET_GIT_BRANCH.to_string(), "git_branch".to_string());
    widgets.insert(WIDGET_GIT_COMMIT.to_string(), "abcdefgh123".to_string());
    widgets.insert(WIDGET_PIPELINE_ENV.to_string(), "test".to_string());
    RunContext {
        notebook_path:
            "/Repos/test@vlfk.no/dp-notebooks/domains/domainfoo/projects/projectfoo/flows/prep/flowfoo"
                .to_string(),
        username: "TestUser@vlfk.no".to_string(),
        widgets,
    }
}

/// Service principal context: no `@` in the username and no `pipeline_env`
/// widget, so the environment infers to prod.
fn prod_context() -> RunContext {
    let mut ctx = run_context();
    ctx.username = "ServicePrincipal".to_string();
    ctx.widgets.remove(WIDGET_PIPELINE_ENV);
    ctx
}

fn set_branch(ctx: &mut RunContext, branch: &str) {
    ctx.widgets
        .insert(WIDGET_GIT_BRANCH.to_string(), branch.to_string());
}

#[test]
fn test_tablename_in_test_contains_user_and_branch() {
    let mut ctx = run_context();
    set_branch(&mut ctx, "feat/new_branch");
    let result = table_name(&ctx, None, "test_db", "training", "test_tbl", None);
    assert_eq!(
        result,
        "training.test_TestUser_featnewbranch_abcdefgh_test_db.test_tbl"
    );
}

#[test]
fn test_schema_name_in_test_contains_user_branch_and_shortsha() {
    let mut ctx = run_context();
    set_branch(&mut ctx, "feat/new_branch");
    let result = schema_name(&ctx, None, "test_db", "training", None);
    assert_eq!(result, "test_TestUser_featnewbranch_abcdefgh_test_db");
}

#[test]
fn test_tablename_in_prod_does_not_contain_user_and_branch() {
    let ctx = prod_context();
    let result = table_name(&ctx, None, "test_db", "training", "test_tbl", None);
    assert_eq!(result, "training.test_db.test_tbl");
}

#[test]
fn test_tablename_with_norwegian_characters_in_table_is_backticked() {
    let ctx = prod_context();
    let result = table_name(&ctx, None, "test_db", "training", "test_tøbbel", None);
    assert_eq!(result, "training.test_db.`test_tøbbel`");
}

#[test]
fn test_tablename_with_norwegian_characters_in_catalog_and_table_is_backticked() {
    let ctx = prod_context();
    let result = table_name(&ctx, None, "test_db", "træning", "test_tøbbel", None);
    assert_eq!(result, "`træning`.test_db.`test_tøbbel`");
}

#[test]
fn test_full_dbname_is_correct() {
    for branch in ["pr122", "averylongbranchname"] {
        let mut ctx = run_context();
        set_branch(&mut ctx, branch);
        let result = dbname(&ctx, None, "test_db", "training", None);
        assert_eq!(
            result,
            format!("training.test_TestUser_{branch}_abcdefgh_test_db")
        );
    }
}

#[test]
fn test_branch_name_with_slash_is_stripped() {
    let mut ctx = run_context();
    set_branch(&mut ctx, "feature/branch");
    let result = dbname(&ctx, None, "test_db", "training", None);
    assert_eq!(result, "training.test_TestUser_featurebranch_abcdefgh_test_db");
}

#[test]
fn test_branch_name_with_underscores_is_stripped() {
    let mut ctx = run_context();
    set_branch(&mut ctx, "feature_of_something_branch");
    let result = dbname(&ctx, None, "test_db", "training", None);
    assert_eq!(
        result,
        "training.test_TestUser_featureofsomethingbranch_abcdefgh_test_db"
    );
}

#[test]
fn test_branch_name_with_whitespace_is_stripped() {
    let mut ctx = run_context();
    set_branch(&mut ctx, "feature branch\tx");
    let result = schema_name(&ctx, None, "test_db", "training", None);
    assert_eq!(result, "test_TestUser_featurebranchx_abcdefgh_test_db");
}

#[test]
fn test_dbname_with_norwegian_characters_in_catalog_is_backticked() {
    let ctx = run_context();
    let result = dbname(&ctx, None, "test_db", "en_liten_ø", None);
    assert_eq!(result, "`en_liten_ø`.test_TestUser_gitbranch_abcdefgh_test_db");
}

#[test]
fn test_catalog_name_is_domain_and_environment_invariant() {
    let ctx = run_context();
    assert_eq!(catalog_name(&ctx, None, Some("prod")), "domainfoo");
    assert_eq!(catalog_name(&ctx, None, Some("test")), "domainfoo");
    assert_eq!(catalog_name(&ctx, None, None), "domainfoo");
}

#[test]
fn test_catalog_name_degrades_to_empty_outside_mesh() {
    let mut ctx = run_context();
    ctx.notebook_path = "/Users/someone/scratch/notebook".to_string();
    assert_eq!(catalog_name(&ctx, None, None), "");
}

#[test]
fn test_jobname() {
    let ctx = run_context();
    let result = job_name(&ctx, None, Some("test"));
    assert_eq!(result, "domainfoo_projectfoo_test_TestUser_gitbranch_abcdefgh");
}

#[test]
fn test_jobname_in_prod_has_no_disambiguation_suffix() {
    let ctx = run_context();
    let result = job_name(&ctx, None, Some("prod"));
    assert_eq!(result, "domainfoo_projectfoo_prod");
}

#[test]
fn test_pipelinename() {
    let ctx = run_context();
    let result = pipeline_name(&ctx, None, Some("test"));
    assert_eq!(
        result,
        "domainfoo_projectfoo_test_TestUser_gitbranch_abcdefgh_dlt"
    );
}

#[test]
fn test_pipelinename_is_jobname_with_dlt_suffix_in_every_env() {
    for (ctx, env) in [
        (run_context(), None),
        (run_context(), Some("test")),
        (run_context(), Some("prod")),
        (prod_context(), None),
    ] {
        let job = job_name(&ctx, None, env);
        let pipeline = pipeline_name(&ctx, None, env);
        assert_eq!(pipeline, format!("{job}_dlt"));
    }
}

#[test]
fn test_explicit_env_overrides_widget() {
    let ctx = run_context();
    // pipeline_env widget says "test" but the explicit argument wins
    assert_eq!(resolve_env(&ctx, Some("prod")), Env::Prod);
    assert_eq!(resolve_env(&ctx, Some("qa")), Env::NonProd("qa".to_string()));
}

#[test]
fn test_env_inference_from_username_and_widget() {
    let mut ctx = run_context();
    assert_eq!(resolve_env(&ctx, None), Env::NonProd("test".to_string()));
    ctx.widgets.remove(WIDGET_PIPELINE_ENV);
    // personal username without a pipeline_env widget leans dev
    assert_eq!(resolve_env(&ctx, None), Env::NonProd("dev".to_string()));
    ctx.username = "ServicePrincipal".to_string();
    assert_eq!(resolve_env(&ctx, None), Env::Prod);
}

#[test]
fn test_escape_sql_name() {
    assert_eq!(escape_sql_name("plain_name_1"), "plain_name_1");
    assert_eq!(escape_sql_name("with-dash"), "`with-dash`");
    assert_eq!(escape_sql_name("tøbbel"), "`tøbbel`");
    assert_eq!(escape_sql_name(""), "");
}

#[test]
fn test_configured_catalog_format_renders_configured_groups() {
    let config = Config {
        naming: NamingConfig {
            path_regexp: Some(
                r".*/orgs/(?P<org>[^/]+)/domains/(?P<domain>[^/]+)/projects/(?P<project>[^/]+)/(?P<activity>[^/]+)/(?P<flowtype>[^/]+)/(?P<flow>[^/]+)"
                    .to_string(),
            ),
            catalog: Some(NameFormat {
                prod: Some("{org}_{domain}_{project}_{env}".to_string()),
                other: Some("{org}_{domain}_{project}_{env}".to_string()),
            }),
            ..NamingConfig::default()
        },
    };
    let mut ctx = run_context();
    ctx.notebook_path =
        "something/orgs/acme/domains/sales/projects/testproject/flows/prep/notebookfoo".to_string();
    assert_eq!(
        catalog_name(&ctx, Some(&config), None),
        "acme_sales_testproject_test"
    );
}

#[test]
fn test_default_formats_apply_when_config_has_no_formats() {
    let config = Config::default();
    let ctx = run_context();
    assert_eq!(catalog_name(&ctx, Some(&config), None), "domainfoo");
}

#[test]
fn test_unknown_placeholder_renders_empty() {
    let config = Config {
        naming: NamingConfig {
            job: Some(NameFormat {
                prod: None,
                other: Some("{domain}_{nosuchfield}_{env}".to_string()),
            }),
            ..NamingConfig::default()
        },
    };
    let ctx = run_context();
    assert_eq!(job_name(&ctx, Some(&config), None), "domainfoo__test");
}

#[test]
fn test_naming_is_idempotent() {
    let ctx = run_context();
    assert_eq!(
        table_name(&ctx, None, "db", "cat", "tbl", None),
        table_name(&ctx, None, "db", "cat", "tbl", None)
    );
    assert_eq!(job_name(&ctx, None, None), job_name(&ctx, None, None));
}

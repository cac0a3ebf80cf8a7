//! Integration tests for Configuration System

use crate::integration::test_utils::{with_xdg_env, write_file};
use agentdef::config::{AgentdefConfig, ConfigLoader};
use agentdef::schema::ValidationProfile;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_defaults_without_any_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config, AgentdefConfig::default());
}

#[test]
fn test_global_file_is_loaded_from_xdg_config_home() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_file(
        test_dir.path(),
        "config/agentdef/config.toml",
        "[validation]\nprofile = \"strict\"\n",
    );

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.validation.profile, ValidationProfile::Strict);
    assert_eq!(config.validation.max_display_name_len, 25);
}

#[test]
fn test_workspace_file_overrides_global() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_file(
        test_dir.path(),
        "config/agentdef/config.toml",
        "[validation]\nprofile = \"strict\"\n\n[catalog]\nroot = \"global-defs\"\n",
    );
    write_file(
        workspace.path(),
        "agentdef.toml",
        "[validation]\nprofile = \"standard\"\n",
    );

    let config = with_xdg_env(&test_dir, || ConfigLoader::load(workspace.path()).unwrap());
    assert_eq!(config.validation.profile, ValidationProfile::Standard);
    assert_eq!(config.catalog.root, PathBuf::from("global-defs"));
}

#[test]
fn test_env_specific_workspace_file() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "agentdef.toml", "[catalog]\nroot = \"defs\"\n");
    write_file(workspace.path(), "agentdef.ci.toml", "[catalog]\nroot = \"ci-defs\"\n");

    let config = with_xdg_env(&test_dir, || {
        std::env::set_var("AGENTDEF_ENV", "ci");
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert_eq!(config.catalog.root, PathBuf::from("ci-defs"));
}

#[test]
fn test_environment_variables_override_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_file(
        workspace.path(),
        "agentdef.toml",
        "[validation]\nmax_display_name_len = 30\n",
    );

    let config = with_xdg_env(&test_dir, || {
        std::env::set_var("AGENTDEF__VALIDATION__MAX_DISPLAY_NAME_LEN", "40");
        std::env::set_var("AGENTDEF__CATALOG__EXTENSIONS", "md,txt");
        ConfigLoader::load(workspace.path()).unwrap()
    });
    assert_eq!(config.validation.max_display_name_len, 40);
    assert_eq!(config.catalog.extensions, vec!["md", "txt"]);
}

#[test]
fn test_explicit_file_skips_workspace_files() {
    let test_dir = TempDir::new().unwrap();
    let workspace = TempDir::new().unwrap();
    write_file(workspace.path(), "agentdef.toml", "[catalog]\nroot = \"defs\"\n");
    write_file(
        workspace.path(),
        "custom.toml",
        "[validation]\nprofile = \"strict\"\n",
    );

    let config = with_xdg_env(&test_dir, || {
        ConfigLoader::load_from_file(&workspace.path().join("custom.toml")).unwrap()
    });
    assert_eq!(config.validation.profile, ValidationProfile::Strict);
    assert_eq!(config.catalog.root, PathBuf::from(".agent"));
}

#[test]
fn test_missing_explicit_file_is_an_error() {
    let test_dir = TempDir::new().unwrap();
    let result = with_xdg_env(&test_dir, || {
        ConfigLoader::load_from_file(&test_dir.path().join("absent.toml"))
    });
    assert!(result.is_err());
}

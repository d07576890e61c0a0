use super::loader::with_env_overrides;
use super::*;
use std::collections::HashMap;
use std::fs;
use tempfile::tempdir;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = Config::default();
    assert_eq!(config.output.color, ColorMode::Auto);
    assert!(config.output.unicode);
    assert_eq!(config.browse.expand_depth, 1);
    assert!(config.browse.show_sizes);
    assert_eq!(config.browse.size_units, SizeUnits::Decimal);
}

#[test]
fn test_config_load_partial_file_keeps_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[browse]\nsize_units = \"binary\"\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.browse.size_units, SizeUnits::Binary);
    assert_eq!(config.browse.expand_depth, 1);
    assert!(config.output.unicode);
}

#[test]
fn test_config_unknown_key_warns_with_suggestion() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[output]\nunicod = false\ncolor = \"never\"\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();
    assert_eq!(config.output.color, ColorMode::Never);
    assert!(config.output.unicode);

    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "unicod");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("unicode"));
}

#[test]
fn test_config_invalid_toml_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[browse\nexpand_depth = ").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(
        err,
        crate::error::ShareTreeError::InvalidConfig { .. }
    ));
}

#[test]
fn test_config_resolve_explicit_missing_file_fails() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(Config::resolve(Some(&missing)).is_err());
}

#[test]
fn test_env_overrides_apply() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("SHARETREE_COLOR", "ALWAYS"),
            ("SHARETREE_UNICODE", "0"),
            ("SHARETREE_EXPAND_DEPTH", "3"),
            ("SHARETREE_SIZE_UNITS", "binary"),
        ]),
    );

    assert_eq!(config.output.color, ColorMode::Always);
    assert!(!config.output.unicode);
    assert_eq!(config.browse.expand_depth, 3);
    assert_eq!(config.browse.size_units, SizeUnits::Binary);
}

#[test]
fn test_env_overrides_ignore_invalid_values() {
    let config = with_env_overrides(
        Config::default(),
        env(&[
            ("SHARETREE_COLOR", "rainbow"),
            ("SHARETREE_EXPAND_DEPTH", "deep"),
            ("SHARETREE_SIZE_UNITS", "furlongs"),
        ]),
    );

    assert_eq!(config, Config::default());
}

//! Tests for the configuration module.
//!
//! This module contains tests for configuration loading, validation, and usage.

use crate::config::{ConfigLoader, LogConfig, Settings, Validate};
use crate::error::ConfigError;
use crate::tests::TestFixture;
use crate::trie::TrieConfig;

/// Test that default configuration can be created and is valid.
#[test]
fn test_default_settings_are_valid() {
    let settings = Settings::default();
    assert!(settings.validate().is_ok());
    assert_eq!(settings.trie, TrieConfig::default());
    assert_eq!(settings.log.level, "info");
}

/// Test that validation catches invalid values in every section.
#[test]
fn test_settings_validation() {
    let mut settings = Settings::default();

    settings.log.level = "loud".to_string();
    assert!(matches!(
        settings.validate(),
        Err(ConfigError::ValidationError(_))
    ));

    settings.log.level = "debug".to_string();
    settings.trie.name = String::new();
    assert!(settings.validate().is_err());

    settings.trie.name = "words".to_string();
    assert!(settings.validate().is_ok());
}

/// Test loading configuration from a TOML file.
#[test]
fn test_load_settings_from_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "settings.toml",
            r#"
            [trie]
            name = "tokens"
            verify_invariants = true

            [log]
            level = "debug"
            "#,
        )
        .unwrap();

    let loader = ConfigLoader::new(Some(&config_path), "TEST_FILE");
    let settings = loader.load().unwrap();

    assert_eq!(settings.trie.name, "tokens");
    assert!(settings.trie.verify_invariants);
    assert_eq!(settings.log.level, "debug");

    // Values absent from the file keep their defaults
    assert_eq!(settings.log, LogConfig {
        level: "debug".to_string(),
        ..LogConfig::default()
    });
}

/// Test that a file produced by serializing settings loads back unchanged.
#[test]
fn test_serialized_settings_load_back() {
    let settings = Settings {
        trie: TrieConfig::new().with_name("roundtrip").with_invariant_checks(false),
        log: LogConfig {
            level: "warn".to_string(),
            json: true,
            source_location: false,
        },
    };

    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file("settings.toml", toml::to_string_pretty(&settings).unwrap())
        .unwrap();

    let loaded = ConfigLoader::new(Some(&config_path), "TEST_ROUNDTRIP")
        .load()
        .unwrap();
    assert_eq!(loaded, settings);
}

/// Test loading configuration with environment variable overrides.
#[test]
fn test_env_var_override() {
    let mut fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "settings.toml",
            r#"
            [trie]
            name = "from-file"
            "#,
        )
        .unwrap();

    fixture.set_env("TEST_ENV__TRIE__NAME", "from-env");
    fixture.set_env("TEST_ENV__LOG__JSON", "true");

    let settings = ConfigLoader::new(Some(&config_path), "TEST_ENV")
        .load()
        .unwrap();

    assert_eq!(settings.trie.name, "from-env");
    assert!(settings.log.json);
}

/// Test that a missing file is reported as such.
#[test]
fn test_missing_config_file() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture.temp_dir.path().join("absent.toml");

    let result = ConfigLoader::new(Some(&config_path), "TEST_MISSING").load();
    assert!(matches!(result, Err(ConfigError::FileNotFound(path)) if path == config_path));
}

/// Test that loading an invalid configuration file returns an error.
#[test]
fn test_load_invalid_config() {
    let fixture = TestFixture::new().unwrap();

    let broken = fixture
        .create_file("broken.toml", "[trie\nname = tokens\"")
        .unwrap();
    assert!(ConfigLoader::new(Some(&broken), "TEST_INVALID").load().is_err());

    let bad_level = fixture
        .create_file("bad_level.toml", "[log]\nlevel = \"loud\"\n")
        .unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&bad_level), "TEST_INVALID").load(),
        Err(ConfigError::ValidationError(_))
    ));

    let unsupported = fixture.create_file("settings.ini", "").unwrap();
    assert!(matches!(
        ConfigLoader::new(Some(&unsupported), "TEST_INVALID").load(),
        Err(ConfigError::ParseError(_))
    ));
}

/// Test that settings build a trie carrying their trie configuration.
#[test]
fn test_build_trie_from_settings() {
    let mut settings = Settings::default();
    settings.trie = TrieConfig::new().with_name("configured");

    let mut trie = settings.build_trie::<u16>();
    trie.insert([1u16, 2, 3]);

    assert_eq!(trie.config().name, "configured");
    assert!(!trie.is_empty());
}

use petfinder::config::{Config, ConfigError};
use std::fs;
use tempfile::TempDir;

/// Test that Config::default() produces the expected values.
#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(config.limits.max_active_pets, 2);
    assert_eq!(config.location.fallback_latitude, -34.610841);
    assert_eq!(config.location.fallback_longitude, -58.563036);
    assert_eq!(config.shop.currency_symbol, "$");
}

#[test]
fn test_config_path_ends_with_expected() {
    let path = Config::config_path();
    assert!(path.ends_with("petfinder/config.toml"));
}

#[test]
fn test_missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config.limits.max_active_pets, 2);
}

/// Sections left out of the file keep their defaults.
#[test]
fn test_partial_file_merges_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[limits]\nmax_active_pets = 3\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.limits.max_active_pets, 3);
    assert_eq!(config.limits.active_pet_limit().max(), 3);
    assert_eq!(config.shop.format_price(2000), "$2000");
}

#[test]
fn test_zero_limit_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[limits]\nmax_active_pets = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
}

#[test]
fn test_out_of_range_fallback_fails_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[location]\nfallback_latitude = 120.0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(err.to_string().contains("Config validation failed"));
}

#[test]
fn test_malformed_toml_is_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[limits\nmax_active_pets = ").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

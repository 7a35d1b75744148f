//! Integration tests for Settings config loading with layered precedence.
//!
//! Note: These tests run without a global config (temp directories only),
//! so they effectively test local config merging with defaults.

use std::fs;

use tempfile::TempDir;

use dotget::config::{local_config_path, OutputFormat, Settings};
use dotget::{AbsencePolicy, DocumentFormat};

#[test]
fn given_no_local_config_when_load_then_uses_defaults() {
    let project = TempDir::new().unwrap();

    let settings = Settings::load(Some(project.path())).expect("load settings");

    assert_eq!(settings.policy, AbsencePolicy::Falsy);
    assert_eq!(settings.output, OutputFormat::Plain);
}

#[test]
fn given_local_config_when_load_then_overrides_defaults() {
    // Arrange
    let project = TempDir::new().unwrap();
    fs::write(
        local_config_path(project.path()),
        "policy = \"missing\"\nformat = \"toml\"\n",
    )
    .unwrap();

    // Act
    let settings = Settings::load(Some(project.path())).expect("load settings");

    // Assert
    assert_eq!(settings.policy, AbsencePolicy::Missing);
    assert_eq!(settings.format, Some(DocumentFormat::Toml));
    assert_eq!(settings.output, OutputFormat::Plain, "unspecified keeps default");
}

#[test]
fn given_local_config_and_cli_flags_when_applied_then_flags_win() {
    let project = TempDir::new().unwrap();
    fs::write(
        local_config_path(project.path()),
        "policy = \"missing\"\noutput = \"json\"\n",
    )
    .unwrap();

    let settings = Settings::load(Some(project.path()))
        .expect("load settings")
        .with_overrides(Some(AbsencePolicy::Falsy), None);

    assert_eq!(settings.policy, AbsencePolicy::Falsy);
    assert_eq!(settings.output, OutputFormat::Json);
}

#[test]
fn given_invalid_local_config_when_load_then_config_error() {
    let project = TempDir::new().unwrap();
    fs::write(local_config_path(project.path()), "policy = \"sometimes\"\n").unwrap();

    let err = Settings::load(Some(project.path())).unwrap_err();

    assert!(err.to_string().starts_with("config error: parse"));
}

#[test]
fn given_loaded_settings_when_showing_then_toml_contains_effective_values() {
    let project = TempDir::new().unwrap();
    fs::write(local_config_path(project.path()), "output = \"json\"\n").unwrap();

    let text = Settings::load(Some(project.path()))
        .expect("load settings")
        .to_toml()
        .expect("serialize");

    assert!(text.contains("policy = \"falsy\""));
    assert!(text.contains("output = \"json\""));
}

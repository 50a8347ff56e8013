//! Unit tests for configuration validation.

use claw_motion::config::{parse_config, validate_config, SystemConfig};
use claw_motion::error::{ConfigError, Error};

/// Test that a valid configuration passes validation.
#[test]
fn test_valid_config_passes_validation() {
    let toml_str = r#"
[axis]
max_revolutions = 2
bump_revolutions = 2.0
min_step_period_ticks = 2
default_step_period_ticks = 2
"#;

    let config: SystemConfig = toml::from_str(toml_str).unwrap();
    assert!(validate_config(&config).is_ok());
}

/// Test that a coarse interval which is not a multiple of the base interval is rejected.
#[test]
fn test_mismatched_intervals() {
    let toml_str = r#"
[timing]
base_interval_us = 30
coarse_interval_us = 1000
"#;

    let result = parse_config(toml_str);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidTiming { base_us: 30, coarse_us: 1000 }))
    ));
}

/// Test that zero travel is rejected.
#[test]
fn test_zero_travel() {
    let toml_str = r#"
[axis]
max_revolutions = 0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidTravel(0)))
    ));
}

/// Test that a bump of zero steps is rejected.
#[test]
fn test_zero_bump() {
    let toml_str = r#"
[axis]
bump_revolutions = 0.0
"#;

    assert!(matches!(
        parse_config(toml_str),
        Err(Error::Config(ConfigError::InvalidBump { steps: 0, max: 38400 }))
    ));
}

/// Test that the error message names the offending values.
#[test]
fn test_error_message() {
    let mut config = SystemConfig::default();
    config.axis.min_step_period_ticks = 30;

    let err = validate_config(&config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid step period: default 25 ticks, minimum 30 ticks. \
         Minimum must be >= 2 and <= default"
    );
}

/// Test that an empty configuration is valid.
#[test]
fn test_empty_config_is_valid() {
    let config = SystemConfig::default();
    assert!(validate_config(&config).is_ok());
}

//! Unit tests for TOML configuration parsing.

use claw_motion::config::{load_config, parse_config, MechanicalConstraints, SystemConfig};
use claw_motion::Microsteps;

/// Test parsing a complete configuration from TOML.
#[test]
fn test_parse_full_config() {
    let toml_str = r#"
[timing]
base_interval_us = 20
coarse_interval_us = 2000

[axis]
steps_per_revolution = 400
microsteps = 8
max_revolutions = 5
bump_revolutions = 0.5
default_step_period_ticks = 10
min_step_period_ticks = 3
invert_direction = true
enable_active_low = false
enable_led_active_high = false

[interlock]
debounce_ms = 50
input_active_high = true
indicator_active_high = false

[heartbeat]
period_ms = 500
"#;

    let config: SystemConfig = toml::from_str(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.timing.base_interval_us.value(), 20);
    assert_eq!(config.timing.coarse_ratio(), 100);
    assert_eq!(config.axis.steps_per_revolution, 400);
    assert_eq!(config.axis.microsteps, Microsteps::EIGHTH);
    assert_eq!(config.axis.max_revolutions, 5);
    assert!(config.axis.invert_direction);
    assert!(!config.axis.enable_active_low);
    assert!(!config.axis.enable_led_active_high);
    assert!(config.interlock.input_active_high);
    assert!(!config.interlock.indicator_active_high);
    assert_eq!(config.heartbeat.period_ms.value(), 500);

    let constraints = MechanicalConstraints::from_config(&config);
    assert_eq!(constraints.steps_per_revolution, 3200);
    assert_eq!(constraints.limits.max_steps, 16_000);
    assert_eq!(constraints.bump_steps, 1600);
    // 2 ms coarse ticks
    assert_eq!(constraints.debounce_ticks, 25);
    assert_eq!(constraints.heartbeat_period_ticks, 250);
    assert_eq!(constraints.min_period_micros().value(), 60);
}

/// Test that missing sections fall back to defaults.
#[test]
fn test_defaults_match_firmware_constants() {
    let config = parse_config("").expect("empty config is valid");
    let constraints = MechanicalConstraints::from_config(&config);

    assert_eq!(constraints.steps_per_revolution, 3200);
    assert_eq!(constraints.limits.min_steps, 0);
    assert_eq!(constraints.limits.max_steps, 38_400);
    assert_eq!(constraints.bump_steps, 800);
    assert_eq!(constraints.default_period_ticks, 25);
    assert_eq!(constraints.min_period_ticks, 4);
    assert_eq!(constraints.coarse_ratio, 100);
    assert_eq!(constraints.debounce_ticks, 100);
    assert_eq!(constraints.heartbeat_period_ticks, 1000);
}

/// Test that an invalid microstep value is rejected while parsing.
#[test]
fn test_invalid_microsteps_rejected() {
    let toml_str = r#"
[axis]
microsteps = 3
"#;

    let result: Result<SystemConfig, _> = toml::from_str(toml_str);
    let err = result.expect_err("microsteps = 3 must not parse");
    assert!(err.to_string().contains("Invalid microsteps: 3"));
}

/// Test loading a configuration file from disk.
#[test]
fn test_load_config_from_file() {
    let path = std::env::temp_dir().join(format!("claw-motion-{}.toml", std::process::id()));
    std::fs::write(&path, "[heartbeat]\nperiod_ms = 200\n").unwrap();

    let config = load_config(&path).expect("config should load");
    assert_eq!(config.heartbeat.period_ms.value(), 200);

    std::fs::remove_file(&path).unwrap();
}

//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MechanicalConstraints, SystemConfig};
use crate::heartbeat::Heartbeat;

/// Validate a system configuration.
///
/// Checks:
/// - Coarse interval is a non-zero multiple of the base interval
/// - Travel covers at least one revolution
/// - Bump size lies within the travel range
/// - Step periods are usable (minimum >= 2 ticks, default >= minimum)
/// - Heartbeat period covers at least two coarse ticks
/// - Debounce covers at least one coarse tick
pub fn validate_config(config: &SystemConfig) -> Result<()> {
    validate_timing(config)?;
    validate_axis(config)?;

    let constraints = MechanicalConstraints::from_config(config);

    if !constraints.limits.is_valid() {
        return Err(Error::Config(ConfigError::InvalidTravel(config.axis.max_revolutions)));
    }

    if constraints.bump_steps <= 0 || constraints.bump_steps > constraints.limits.max_steps {
        return Err(Error::Config(ConfigError::InvalidBump {
            steps: constraints.bump_steps,
            max: constraints.limits.max_steps,
        }));
    }

    if constraints.heartbeat_period_ticks < Heartbeat::MIN_PERIOD {
        return Err(Error::Config(ConfigError::InvalidHeartbeatPeriod(
            config.heartbeat.period_ms.value(),
        )));
    }

    if constraints.debounce_ticks == 0 {
        return Err(Error::Config(ConfigError::InvalidDebounce(
            config.interlock.debounce_ms.value(),
        )));
    }

    Ok(())
}

fn validate_timing(config: &SystemConfig) -> Result<()> {
    let timing = &config.timing;
    if timing.coarse_ratio() == 0 {
        return Err(Error::Config(ConfigError::InvalidTiming {
            base_us: timing.base_interval_us.value(),
            coarse_us: timing.coarse_interval_us.value(),
        }));
    }
    Ok(())
}

fn validate_axis(config: &SystemConfig) -> Result<()> {
    let axis = &config.axis;

    // A step needs a tick to raise the pulse and a later tick to lower it
    if axis.min_step_period_ticks < 2 || axis.default_step_period_ticks < axis.min_step_period_ticks
    {
        return Err(Error::Config(ConfigError::InvalidStepPeriod {
            default: axis.default_step_period_ticks,
            min: axis.min_step_period_ticks,
        }));
    }

    Ok(())
}

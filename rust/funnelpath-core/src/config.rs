use std::env;

use crate::errors::ConfigError;
use crate::options::SmoothOptions;

pub const ENV_EQUAL_TOLERANCE: &str = "FUNNELPATH_EQUAL_TOLERANCE";
pub const ENV_DEDUPE: &str = "FUNNELPATH_DEDUPE";

/// Reads [`SmoothOptions`] from the process environment, falling back to defaults
/// for unset variables.
pub fn options_from_env() -> Result<SmoothOptions, ConfigError> {
    options_from_lookup(|key| env::var(key).ok())
}

pub fn options_from_lookup<F>(lookup: F) -> Result<SmoothOptions, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut options = SmoothOptions::default();

    if let Some(raw) = lookup(ENV_EQUAL_TOLERANCE) {
        let tolerance = raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidValue {
                key: ENV_EQUAL_TOLERANCE,
                value: raw.clone(),
            })?;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance(tolerance));
        }
        options.equal_tolerance = tolerance;
    }

    if let Some(raw) = lookup(ENV_DEDUPE) {
        options.dedupe_waypoints = match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => true,
            "0" | "false" | "no" | "off" => false,
            _ => return Err(ConfigError::InvalidValue { key: ENV_DEDUPE, value: raw }),
        };
    }

    Ok(options)
}

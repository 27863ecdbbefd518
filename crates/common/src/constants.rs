/// Lower bound of the display auto-refresh cadence, in seconds.
pub const REFRESH_INTERVAL_MIN_SECONDS: f64 = 15.0;
/// Upper bound of the display auto-refresh cadence, in seconds.
pub const REFRESH_INTERVAL_MAX_SECONDS: f64 = 120.0;
/// Cadence assigned to new display placements and on every switch back to display.
pub const REFRESH_INTERVAL_DEFAULT_SECONDS: f64 = 60.0;
/// Stored cadence when auto-refresh is disabled (video placements, negative input).
pub const REFRESH_INTERVAL_DISABLED: f64 = 0.0;

/// Prefix for environment variables overriding ad-unit settings.
pub const ENV_PREFIX: &str = "AD_UNIT";
/// Separator between path segments of an environment override.
pub const ENV_SEPARATOR: &str = "__";

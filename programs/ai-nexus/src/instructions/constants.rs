//! Shared constants for instruction handlers

/// Length of the rate limit window in seconds
pub const RATE_LIMIT_WINDOW: i64 = 60;

/// Maximum rate-limited actions per identity per window
pub const MAX_ACTIONS_PER_WINDOW: u32 = 10;

/// Minimum interval between rate-limited actions in seconds
pub const MIN_ACTION_INTERVAL: i64 = 5;

/// Maximum deadline relative to current time (1 year in seconds)
pub const MAX_DEADLINE_SECONDS: i64 = 365 * 24 * 3600;

/// Health window over which reported errors are rated, in seconds (1 hour)
pub const HEALTH_WINDOW: i64 = 3600;

/// Errors per health window above which the system is Degraded
pub const DEGRADED_ERROR_THRESHOLD: u64 = 10;

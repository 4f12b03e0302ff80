//! Configuration for running station scripts.

/// Environment variable overriding the default platform count.
pub const PLATFORMS_VAR: &str = "STATION_PLATFORMS";

/// Environment variable enabling a dump after each mutating command.
pub const SHOW_AFTER_EACH_VAR: &str = "STATION_SHOW_AFTER_EACH";

/// Environment variable making rejected operations fatal.
pub const STOP_ON_ERROR_VAR: &str = "STATION_STOP_ON_ERROR";

/// Configuration parameters for the script runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Number of platforms of the station used until an `open` command.
    pub default_platforms: usize,

    /// Print the station dump after every command that changes it.
    pub show_after_each: bool,

    /// Abort the script at the first rejected station operation.
    /// By default rejected operations are logged and skipped.
    pub stop_on_error: bool,
}

impl RunnerConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(default_platforms: usize, show_after_each: bool, stop_on_error: bool) -> Self {
        Self {
            default_platforms,
            show_after_each,
            stop_on_error,
        }
    }

    /// Default configuration overlaid with any `STATION_*` environment variables.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(platforms) = lookup(PLATFORMS_VAR).and_then(|v| v.trim().parse().ok()) {
            config.default_platforms = platforms;
        }
        if let Some(show) = lookup(SHOW_AFTER_EACH_VAR).and_then(|v| parse_flag(&v)) {
            config.show_after_each = show;
        }
        if let Some(stop) = lookup(STOP_ON_ERROR_VAR).and_then(|v| parse_flag(&v)) {
            config.stop_on_error = stop;
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            default_platforms: 5,
            show_after_each: false,
            stop_on_error: false,
        }
    }
}

use mountfit_core::compatibility::CompatibilityPolicy;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Evaluator tunables (safety factor, series thresholds).
    pub policy: CompatibilityPolicy,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                   | Default   |
    /// |---------------------------|-----------|
    /// | `HOST`                    | `0.0.0.0` |
    /// | `PORT`                    | `3000`    |
    /// | `REQUEST_TIMEOUT_SECS`    | `30`      |
    /// | `WEIGHT_SAFETY_FACTOR`    | `0.85`    |
    /// | `BEAST_MIN_WEIGHT_LB`     | `100`     |
    /// | `COMPACT_MAX_SIZE_INCHES` | `34`      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let defaults = CompatibilityPolicy::default();
        let policy = CompatibilityPolicy {
            weight_safety_factor: env_f64("WEIGHT_SAFETY_FACTOR", defaults.weight_safety_factor),
            beast_min_weight_lb: env_f64("BEAST_MIN_WEIGHT_LB", defaults.beast_min_weight_lb),
            compact_max_size_inches: env_f64(
                "COMPACT_MAX_SIZE_INCHES",
                defaults.compact_max_size_inches,
            ),
        };

        Self {
            host,
            port,
            request_timeout_secs,
            policy,
        }
    }
}

/// Read an `f64` environment variable, falling back to `default` when the
/// variable is unset. Misconfiguration fails fast at startup.
fn env_f64(name: &str, default: f64) -> f64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a number")),
        Err(_) => default,
    }
}

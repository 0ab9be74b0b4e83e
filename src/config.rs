use std::env;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 3001;
}

/// Get the HTTP port from the environment, falling back to the default
pub fn port() -> u16 {
    env::var(env_vars::PORT)
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(defaults::PORT)
}

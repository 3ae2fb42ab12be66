//! Compile-time environment, the build-time counterpart of the fetched
//! runtime configuration.
//!
//! Values are fixed when the binary is built: `SHELLCFG_HELLO_WORLD` and
//! `SHELLCFG_CONFIG_URL` override the defaults through `option_env!`.
//! Nothing here reads the process environment at runtime.

/// Static key-value environment baked into the binary.
#[derive(Debug, Clone, Copy)]
pub struct Environment {
    /// Build-time value for the `helloWorld` key, displayed next to the
    /// runtime-config value.
    pub hello_world: &'static str,
    /// Endpoint the runtime configuration is fetched from.
    pub config_url: &'static str,
}

const fn baked(overridden: Option<&'static str>, default: &'static str) -> &'static str {
    match overridden {
        Some(value) => value,
        None => default,
    }
}

/// The environment this binary was built with.
pub const ENVIRONMENT: Environment = Environment {
    hello_world: baked(
        option_env!("SHELLCFG_HELLO_WORLD"),
        "Hello from Environment",
    ),
    config_url: baked(
        option_env!("SHELLCFG_CONFIG_URL"),
        "http://localhost:8080/assets/config.json",
    ),
};

//! Configuration loading and listen port resolution

use crate::{Error, Result};

/// Compiled default listen port
pub const DEFAULT_PORT: u16 = 4000;

/// Environment variable consulted for the listen port
pub const PORT_ENV_VAR: &str = "HUBMOCK_PORT";

/// Listen port resolution, priority order:
/// 1. Command-line argument (highest priority)
/// 2. `HUBMOCK_PORT` environment variable
/// 3. Compiled default (4000)
///
/// A present but unparseable environment value is a configuration error
/// rather than a silent fallback, so a typo'd deployment fails fast.
pub fn resolve_port(cli_arg: Option<u16>) -> Result<u16> {
    // Priority 1: Command-line argument
    if let Some(port) = cli_arg {
        return Ok(port);
    }

    // Priority 2: Environment variable
    if let Ok(value) = std::env::var(PORT_ENV_VAR) {
        return value.parse::<u16>().map_err(|_| {
            Error::Config(format!(
                "{} must be a port number, got {:?}",
                PORT_ENV_VAR, value
            ))
        });
    }

    // Priority 3: Compiled default
    Ok(DEFAULT_PORT)
}

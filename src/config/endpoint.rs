//! RPC endpoint resolution.
//!
//! Turns [`NodeConfig`] plus the access credential from the environment into
//! the URL the client connects to. Runs before any network activity so a
//! missing key aborts the process without touching the node.

use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::{NodeConfig, CREDENTIAL_MARKER};

/// Resolve the endpoint URL using `lookup` to read environment variables.
pub fn resolve_endpoint_with<F>(config: &NodeConfig, lookup: F) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = match &config.rpc_url {
        Some(url) => url.clone(),
        None => {
            let credential = lookup(&config.credential_env)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingCredential(config.credential_env.clone()))?;

            if credential == config.placeholder {
                return Err(ConfigError::PlaceholderCredential(config.credential_env.clone()));
            }

            config.endpoint_template.replace(CREDENTIAL_MARKER, &credential)
        }
    };

    // Report the template, never the substituted credential.
    let shown = config.rpc_url.clone().unwrap_or_else(|| config.endpoint_template.clone());
    Url::parse(&raw).map_err(|e| ConfigError::InvalidEndpoint {
        url: shown,
        reason: e.to_string(),
    })
}

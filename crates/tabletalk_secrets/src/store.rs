//! Secret store client (KV-v2 wire format).

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

use crate::bundle::SecretBundle;
use crate::error::{Error, Result};

/// Connection settings for the secret store.
#[derive(Clone, Debug)]
pub struct SecretStoreConfig {
    /// Store base address, e.g. "https://vault.internal:8200".
    pub addr: String,
    /// Access token presented on every request.
    pub token: String,
    /// Namespace for multi-tenant stores (optional).
    pub namespace: Option<String>,
}

impl SecretStoreConfig {
    pub fn new(addr: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            token: token.into(),
            namespace: None,
        }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Create config from environment variables.
    ///
    /// Required: `SECRET_STORE_ADDR`, `SECRET_STORE_TOKEN`
    /// Optional: `SECRET_STORE_NAMESPACE`
    pub fn from_env() -> Result<Self> {
        let addr = std::env::var("SECRET_STORE_ADDR")
            .map_err(|_| Error::Config("SECRET_STORE_ADDR not set".into()))?;
        let token = std::env::var("SECRET_STORE_TOKEN")
            .map_err(|_| Error::Config("SECRET_STORE_TOKEN not set".into()))?;
        let namespace = std::env::var("SECRET_STORE_NAMESPACE").ok();

        Ok(Self {
            addr,
            token,
            namespace,
        })
    }
}

/// KV-v2 read response: the mapping sits under `data.data`.
#[derive(Debug, Deserialize)]
struct ReadSecretResponse {
    data: SecretData,
}

#[derive(Debug, Deserialize)]
struct SecretData {
    data: HashMap<String, String>,
}

/// Fetch a named secret bundle from the store.
///
/// Opens a fresh session, performs the single lookup, and drops the
/// connection. Retrieval happens once per process lifetime, so no handle
/// is kept around. Either the full bundle comes back or the call fails;
/// there is no partial result and no retry.
pub async fn fetch_secret(config: &SecretStoreConfig, name: &str) -> Result<SecretBundle> {
    if name.is_empty() {
        return Err(Error::Config("secret name is empty".into()));
    }

    let url = format!(
        "{}/v1/secret/data/{}",
        config.addr.trim_end_matches('/'),
        name
    );

    let client = reqwest::Client::new();
    let mut request = client.get(&url).header("X-Vault-Token", &config.token);
    if let Some(ref namespace) = config.namespace {
        request = request.header("X-Vault-Namespace", namespace);
    }

    let response = request.send().await?;
    let status = response.status();

    match status.as_u16() {
        200 => {}
        404 => return Err(Error::NotFound(name.to_string())),
        401 | 403 => return Err(Error::AccessDenied(name.to_string())),
        _ => {
            return Err(Error::Unavailable(format!(
                "store returned {} for '{}'",
                status, name
            )));
        }
    }

    let parsed: ReadSecretResponse = response
        .json()
        .await
        .map_err(|e| Error::MalformedPayload(e.to_string()))?;

    debug!(
        secret = name,
        fields = parsed.data.data.len(),
        "fetched secret bundle"
    );

    Ok(SecretBundle::new(name, parsed.data.data))
}

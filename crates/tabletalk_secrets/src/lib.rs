//! tabletalk_secrets — secret bundle retrieval for client construction.
//!
//! One lookup per process lifetime: open a session against the secret
//! store, read the named bundle, hand the parsed key/value mapping to the
//! caller. No caching, no refresh, no retry, no local fallback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tabletalk_secrets::{SecretStoreConfig, fetch_secret};
//!
//! # async fn run() -> tabletalk_secrets::Result<()> {
//! let config = SecretStoreConfig::from_env()?;
//! let bundle = fetch_secret(&config, "openai/prod").await?;
//! let api_key = bundle.require("api_key")?;
//! # Ok(())
//! # }
//! ```

pub mod bundle;
pub mod error;
pub mod store;

pub use bundle::SecretBundle;
pub use error::{Error, Result};
pub use store::{SecretStoreConfig, fetch_secret};

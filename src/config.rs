use anyhow::Result;
use serde::Deserialize;
use std::{net::SocketAddr, path::Path, sync::Arc};
use tokio::fs;

/// Parse the configuration from a given file
pub async fn parse<P: AsRef<Path>>(path: P) -> Result<SharedConfig> {
    let raw = fs::read(path).await?;
    let data = toml::from_slice(&raw)?;
    Ok(Arc::new(data))
}

pub type SharedConfig = Arc<Config>;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub server: Server,
    pub manager: Manager,
}

#[derive(Debug, Deserialize)]
pub struct Server {
    pub address: SocketAddr,
    pub log: String,
    #[serde(default)]
    pub sentry: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Manager {
    Http {
        url: String,
        #[serde(default)]
        token: Option<String>,
        #[serde(default = "default_timeout")]
        timeout: u64,
    },
    Noop,
}

impl Manager {
    /// A friendly name for the manager engine
    pub fn kind<'a>(&self) -> &'a str {
        match self {
            Self::Http { .. } => "http",
            Self::Noop => "noop",
        }
    }
}

fn default_timeout() -> u64 {
    30
}

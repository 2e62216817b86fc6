use crate::config::Manager as ManagerConfig;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

mod error;
mod http;
mod noop;

pub use error::Error;
pub(crate) use error::Result;
use http::Http;
use noop::Noop;

/// The resource the build manager produced in response to a callback. Its
/// shape belongs to the build manager, so it is passed through untouched.
pub type Workload = Value;

/// A build manager shared between all the request handlers
pub type SharedBuildManager = Arc<dyn BuildManager>;

/// Connect to the build manager described by the configuration
fn connect(config: &ManagerConfig) -> Result<SharedBuildManager> {
    let manager: SharedBuildManager = match config {
        ManagerConfig::Http {
            url,
            token,
            timeout,
        } => Arc::new(Http::new(url, token.as_deref(), *timeout)?),
        ManagerConfig::Noop => Arc::new(Noop),
    };

    Ok(manager)
}

/// Create the build manager and test its connection
pub async fn initialize(config: &ManagerConfig) -> Result<SharedBuildManager> {
    let manager = connect(config)?;
    manager.test().await?;

    info!(kind = config.kind(), "connected to build manager");
    Ok(manager)
}

/// The interface for handing build callbacks off for processing
#[async_trait]
pub trait BuildManager: Send + Sync {
    /// Test the connection to the build manager
    async fn test(&self) -> Result<()>;

    /// Process a completed build for an agent, returning the workload that
    /// was created or updated for it
    async fn handle_build_callback(
        &self,
        org_id: Uuid,
        project_name: &str,
        agent_name: &str,
    ) -> Result<Workload>;
}

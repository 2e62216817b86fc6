use super::{BuildManager, Result, Workload};
use async_trait::async_trait;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

/// A build manager that does not talk to any backend. Every callback is
/// answered with a workload describing the agent, which is enough to run the
/// service locally.
#[derive(Debug)]
pub(crate) struct Noop;

#[async_trait]
impl BuildManager for Noop {
    async fn test(&self) -> Result<()> {
        Ok(())
    }

    async fn handle_build_callback(
        &self,
        org_id: Uuid,
        project_name: &str,
        agent_name: &str,
    ) -> Result<Workload> {
        info!(%org_id, project_name, agent_name, "skipping build callback");

        Ok(json!({
            "kind": "Workload",
            "metadata": {
                "name": format!("{}-workload", agent_name),
                "project": project_name,
                "organization": org_id,
            },
            "status": "created",
        }))
    }
}

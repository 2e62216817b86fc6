use serde::Deserialize;
use uuid::Uuid;

/// Sent by the build pipeline once a build for an agent completes
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildCallback {
    pub agent_name: String,
    pub project_name: String,
    pub org_id: Uuid,
}

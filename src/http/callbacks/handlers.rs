use super::models::BuildCallback;
use crate::{
    http::{reply, Error, Result},
    manager::SharedBuildManager,
};
use axum::{
    body::{Body, HttpBody},
    extract::RawBody,
    http::StatusCode,
    response::Response,
    Error as AxumError, Extension,
};
use tracing::info;

/// The largest callback body that will be buffered
const BODY_LIMIT: usize = 64 * 1024;

/// Handle a build completion callback by handing it to the build manager
pub async fn build(
    Extension(manager): Extension<SharedBuildManager>,
    RawBody(raw_body): RawBody,
) -> Result<Response> {
    let raw_body = read_limited(raw_body, BODY_LIMIT).await?;
    let body: BuildCallback = serde_json::from_slice(&raw_body)?;
    info!(
        agent = %body.agent_name,
        project = %body.project_name,
        org = %body.org_id,
        "build callback received"
    );

    sentry::configure_scope(|scope| {
        scope.set_tag("callback.agent", &body.agent_name);
        scope.set_tag("callback.project", &body.project_name);
        scope.set_tag("callback.org", body.org_id);
    });

    let workload = manager
        .handle_build_callback(body.org_id, &body.project_name, &body.agent_name)
        .await?;

    Ok(reply::json(StatusCode::OK, &workload))
}

/// Buffer the body, giving up once it grows past `limit` bytes
async fn read_limited(mut body: Body, limit: usize) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    while let Some(chunk) = body.data().await {
        let chunk = chunk.map_err(|e| Error::UnreadableBody(AxumError::new(e)))?;
        if buffer.len() + chunk.len() > limit {
            return Err(Error::BodyTooLarge { limit });
        }
        buffer.extend_from_slice(&chunk);
    }

    Ok(buffer)
}

use super::{BuildManager, Error, Result, Workload};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;
use uuid::Uuid;

/// Hands build callbacks to a remote build manager over HTTP
#[derive(Debug)]
pub(crate) struct Http {
    client: Client,
    url: Url,
}

impl Http {
    /// Create a new client for the build manager at `url`
    pub fn new(url: &str, token: Option<&str>, timeout: u64) -> Result<Http> {
        let url = Url::parse(url)?;
        if url.cannot_be_a_base() {
            return Err(Error::Config);
        }

        let mut headers = HeaderMap::new();
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Http { client, url })
    }

    /// Join path segments onto the base URL, escaping each one
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// The URL a callback for the given agent is delivered to
    fn callback_url(&self, org_id: Uuid, project_name: &str, agent_name: &str) -> Url {
        let org_id = org_id.to_string();
        self.endpoint(&[
            "orgs",
            org_id.as_str(),
            "projects",
            project_name,
            "agents",
            agent_name,
            "build-callback",
        ])
    }
}

#[async_trait]
impl BuildManager for Http {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn test(&self) -> Result<()> {
        self.client
            .get(self.endpoint(&["health"]))
            .send()
            .await?
            .error_for_status()?;

        debug!("build manager is healthy");
        Ok(())
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn handle_build_callback(
        &self,
        org_id: Uuid,
        project_name: &str,
        agent_name: &str,
    ) -> Result<Workload> {
        let response = self
            .client
            .post(self.callback_url(org_id, project_name, agent_name))
            .send()
            .await?
            .error_for_status()?;
        debug!(status = %response.status(), "build manager accepted callback");

        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(Workload::Null);
        }

        Ok(serde_json::from_slice(&body)?)
    }
}

use async_trait::async_trait;
use reqwest::{Response, Url};
use tracing::{debug, instrument, trace};

use prj_core::{ResourceService, ServiceError};
use prj_model::{CreateHandle, Cursor, Page, ProjectSpec};

use crate::{
    config::ConnectionConfig,
    errors::ClientError,
    wire::{API_VERSION_PARAM, CONTINUATION_HEADER, CONTINUATION_PARAM, ProjectList},
};

const USER_AGENT: &str = concat!("prjctl/", env!("CARGO_PKG_VERSION"));

/// Client for the organization-level projects API.
///
/// Holds a single connection pool; share it between workers behind an `Arc`.
#[derive(Debug)]
pub struct DevOpsClient {
    http: reqwest::Client,
    projects: Url,
    token: String,
    api_version: String,
}

impl DevOpsClient {
    pub fn new(cfg: ConnectionConfig) -> Result<Self, ClientError> {
        cfg.validate()?;

        let base = cfg.organization_url.trim().trim_end_matches('/');
        let projects = Url::parse(&format!("{base}/_apis/projects")).map_err(|e| {
            ClientError::InvalidUrl {
                url: cfg.organization_url.clone(),
                reason: e.to_string(),
            }
        })?;
        let http = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            http,
            projects,
            token: cfg.personal_access_token,
            api_version: cfg.api_version,
        })
    }

    fn endpoint(&self, cursor: Option<&Cursor>) -> Url {
        let mut url = self.projects.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair(API_VERSION_PARAM, &self.api_version);
            if let Some(cursor) = cursor.filter(|c| !c.is_end()) {
                query.append_pair(CONTINUATION_PARAM, cursor.as_str());
            }
        }
        url
    }
}

#[async_trait]
impl ResourceService for DevOpsClient {
    #[instrument(level = "debug", skip(self, spec), fields(project = %spec.name))]
    async fn create(&self, spec: &ProjectSpec) -> Result<CreateHandle, ServiceError> {
        let response = self
            .http
            .post(self.endpoint(None))
            .basic_auth("", Some(&self.token))
            .json(spec)
            .send()
            .await
            .map_err(transport)?;

        let body = success_body(response).await?;
        let handle: CreateHandle = serde_json::from_str(&body).map_err(|e| {
            ServiceError::Decode(format!("failed to parse operation reference: {e}, body: {body}"))
        })?;
        debug!(operation = %handle.id, status = ?handle.status, "project creation queued");
        Ok(handle)
    }

    #[instrument(level = "debug", skip(self))]
    async fn list(&self, cursor: Option<&Cursor>) -> Result<Page, ServiceError> {
        let response = self
            .http
            .get(self.endpoint(cursor))
            .basic_auth("", Some(&self.token))
            .send()
            .await
            .map_err(transport)?;

        let next = response
            .headers()
            .get(CONTINUATION_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(Cursor::from);

        let body = success_body(response).await?;
        let list: ProjectList = serde_json::from_str(&body).map_err(|e| {
            ServiceError::Decode(format!("failed to parse project list: {e}, body: {body}"))
        })?;
        trace!(records = list.value.len(), more = next.is_some(), "project page received");

        Ok(Page::new(list.value, next))
    }
}

fn transport(e: reqwest::Error) -> ServiceError {
    ServiceError::Transport(e.to_string())
}

async fn success_body(response: Response) -> Result<String, ServiceError> {
    let status = response.status();
    let body = response.text().await.map_err(transport)?;
    if !status.is_success() {
        return Err(ServiceError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use url::Url;

use crate::config::Config;
use crate::dto::job_post_dto::{JobPostPayload, LinkedInResponse, PostJobResponse};
use crate::error::{Error, Result};

/// The external job-posting backend.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JobBoard: Send + Sync {
    async fn post_job(&self, payload: &JobPostPayload) -> Result<PostJobResponse>;

    async fn post_job_to_linkedin(&self, job_id: &str) -> Result<LinkedInResponse>;
}

#[derive(Clone)]
pub struct HttpJobBoard {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

impl HttpJobBoard {
    pub fn new(mut base_url: Url, token: Option<String>, client: Client) -> Self {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            client,
            base_url,
            token,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.job_api_timeout_secs))
            .build()?;
        info!(
            base_url = %config.job_api_base_url,
            authenticated = config.job_api_token.is_some(),
            "Job board client configured"
        );
        Ok(Self::new(
            config.job_api_base_url.clone(),
            config.job_api_token.clone(),
            client,
        ))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `segments` under the base path. Each segment is
    /// percent-encoded, so a job id cannot add path levels or a query.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if segments
            .iter()
            .any(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(Error::BadRequest(format!(
                "Invalid job service path {:?}",
                segments
            )));
        }
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::Config(format!(
                    "JOB_API_BASE_URL cannot carry a path: {}",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            warn!("Job board rejected credentials");
            return Err(Error::Unauthorized(
                "Job service session expired, sign in again".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(Error::Upstream {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl JobBoard for HttpJobBoard {
    async fn post_job(&self, payload: &JobPostPayload) -> Result<PostJobResponse> {
        let url = self.endpoint(&["jobs"])?;
        let response = self
            .authorize(self.client.post(url))
            .json(payload)
            .send()
            .await?;
        let reply: PostJobResponse = Self::read_json(response).await?;

        if !reply.success {
            return Err(Error::Upstream {
                status: StatusCode::OK.as_u16(),
                message: reply
                    .message
                    .unwrap_or_else(|| "Job was not accepted".to_string()),
            });
        }
        info!(job_id = %reply.job_id, "Job posted");
        Ok(reply)
    }

    async fn post_job_to_linkedin(&self, job_id: &str) -> Result<LinkedInResponse> {
        let url = self.endpoint(&["jobs", job_id, "linkedin"])?;
        let response = self.authorize(self.client.post(url)).send().await?;
        let reply: LinkedInResponse = Self::read_json(response).await?;
        info!(job_id, "Job shared to LinkedIn");
        Ok(reply)
    }
}

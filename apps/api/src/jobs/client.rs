//! JSearch client: fetches job listings from the external provider.
//!
//! All provider traffic goes through this module. Requests carry a timeout and
//! are retried on transport errors, 429 and 5xx with capped exponential backoff.
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::Config;
use crate::jobs::{JobProvider, JobSearchError, PAGE_SIZE};
use crate::models::job::JobListing;

const MAX_ATTEMPTS: u32 = 3;
const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(4);

#[derive(Debug, Deserialize)]
struct ProviderResponse {
    #[serde(default)]
    data: Vec<ProviderJob>,
}

#[derive(Debug, Deserialize)]
struct ProviderJob {
    job_id: String,
    job_title: Option<String>,
    employer_name: Option<String>,
    job_city: Option<String>,
    job_state: Option<String>,
    job_country: Option<String>,
    job_is_remote: Option<bool>,
    job_description: Option<String>,
    job_apply_link: Option<String>,
    job_employment_type: Option<String>,
    job_posted_at_datetime_utc: Option<String>,
}

impl From<ProviderJob> for JobListing {
    fn from(job: ProviderJob) -> Self {
        let is_remote = job.job_is_remote.unwrap_or(false);
        let mut location = [&job.job_city, &job.job_state, &job.job_country]
            .into_iter()
            .flatten()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        if location.is_empty() && is_remote {
            location = "Remote".to_string();
        }

        JobListing {
            id: job.job_id,
            title: job.job_title.unwrap_or_else(|| "Untitled position".to_string()),
            company: job.employer_name.unwrap_or_else(|| "Unknown".to_string()),
            location,
            is_remote,
            employment_type: job.job_employment_type,
            description: job.job_description,
            apply_url: job.job_apply_link,
            posted_at: job.job_posted_at_datetime_utc,
        }
    }
}

/// Delay before retry number `attempt` (1-based): 500ms, 1s, 2s, … capped at 4s.
fn backoff_delay(attempt: u32) -> Duration {
    let factor = 1u32 << attempt.saturating_sub(1).min(16);
    INITIAL_BACKOFF.saturating_mul(factor).min(MAX_BACKOFF)
}

#[derive(Clone)]
pub struct JSearchClient {
    client: Client,
    base_url: String,
    api_key: String,
    api_host: String,
}

impl JSearchClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.job_search_timeout_secs))
            .build()
            .context("Failed to build job search HTTP client")?;

        Ok(Self {
            client,
            base_url: config.job_search_base_url.clone(),
            api_key: config.job_search_api_key.clone(),
            api_host: config.job_search_api_host.clone(),
        })
    }

    /// GETs `path` with `query`, retrying transient failures.
    async fn get(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ProviderResponse, JobSearchError> {
        let url = format!("{}/{}", self.base_url, path);
        let mut last_error: Option<JobSearchError> = None;

        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                warn!(
                    "Job search attempt {} failed, retrying after {}ms...",
                    attempt,
                    delay.as_millis()
                );
                tokio::time::sleep(delay).await;
            }

            let response = self
                .client
                .get(&url)
                .header("X-RapidAPI-Key", &self.api_key)
                .header("X-RapidAPI-Host", &self.api_host)
                .query(query)
                .send()
                .await;

            let response = match response {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(JobSearchError::Http(e));
                    continue;
                }
            };

            let status = response.status();

            if status.as_u16() == 429 || status.is_server_error() {
                let body = response.text().await.unwrap_or_default();
                warn!("Job search provider returned {}: {}", status, body);
                last_error = Some(JobSearchError::Api {
                    status: status.as_u16(),
                    message: body,
                });
                continue;
            }

            if !status.is_success() {
                let body = response.text().await.unwrap_or_default();
                return Err(JobSearchError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }

            let parsed: ProviderResponse = response.json().await?;
            debug!(path, results = parsed.data.len(), "Job search call succeeded");
            return Ok(parsed);
        }

        Err(last_error.unwrap_or(JobSearchError::Exhausted {
            attempts: MAX_ATTEMPTS,
        }))
    }
}

#[async_trait]
impl JobProvider for JSearchClient {
    async fn search(&self, query: &str, page: u32) -> Result<Vec<JobListing>, JobSearchError> {
        let response = self
            .get(
                "search",
                &[
                    ("query", query.to_string()),
                    ("page", page.to_string()),
                    ("num_pages", "1".to_string()),
                ],
            )
            .await?;

        Ok(response
            .data
            .into_iter()
            .take(PAGE_SIZE)
            .map(JobListing::from)
            .collect())
    }

    async fn details(&self, job_id: &str) -> Result<Option<JobListing>, JobSearchError> {
        let response = self
            .get("job-details", &[("job_id", job_id.to_string())])
            .await?;
        Ok(response.data.into_iter().next().map(JobListing::from))
    }
}

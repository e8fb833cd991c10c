// Job search: provider seam, JSearch client, location post-filter, handlers.

pub mod client;
pub mod filter;
pub mod handlers;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::job::JobListing;

/// Raw results requested per provider page.
pub const PAGE_SIZE: usize = 10;

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Provider still failing after {attempts} attempts")]
    Exhausted { attempts: u32 },
}

/// A source of job listings. Implement this to swap providers without
/// touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn JobProvider>`.
#[async_trait]
pub trait JobProvider: Send + Sync {
    /// One page (1-based) of raw, unfiltered results for a free-text query.
    async fn search(&self, query: &str, page: u32) -> Result<Vec<JobListing>, JobSearchError>;

    /// Looks up a single listing. `Ok(None)` when the provider has no such id.
    async fn details(&self, job_id: &str) -> Result<Option<JobListing>, JobSearchError>;
}

/// Free-text provider query: "<title> in <location>", or just the location.
pub fn build_query(title: Option<&str>, location: &str) -> String {
    let location = location.trim();
    match title.map(str::trim).filter(|t| !t.is_empty()) {
        Some(title) => format!("{title} in {location}"),
        None => location.to_string(),
    }
}

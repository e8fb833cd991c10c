use serde::{Deserialize, Serialize};

/// A single job listing as returned to API clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    /// Display location, e.g. "Seattle, WA, US". May be empty.
    pub location: String,
    pub is_remote: bool,
    pub employment_type: Option<String>,
    pub description: Option<String>,
    pub apply_url: Option<String>,
    pub posted_at: Option<String>,
}

/// One page of location-filtered search results.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobSearchPage {
    pub jobs: Vec<JobListing>,
    pub page: u32,
    /// The provider returned a full page, so another page may exist.
    pub has_more: bool,
}

/// Job details. `placeholder` is set when the provider could not resolve the
/// id and the listing fields were synthesized.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetails {
    #[serde(flatten)]
    pub listing: JobListing,
    pub placeholder: bool,
}

impl JobDetails {
    pub fn resolved(listing: JobListing) -> Self {
        Self {
            listing,
            placeholder: false,
        }
    }

    pub fn placeholder(id: &str) -> Self {
        Self {
            listing: JobListing {
                id: id.to_string(),
                title: "Job details unavailable".to_string(),
                company: "Unknown".to_string(),
                location: String::new(),
                is_remote: false,
                employment_type: None,
                description: Some(
                    "Details for this job could not be retrieved from the job search provider."
                        .to_string(),
                ),
                apply_url: None,
                posted_at: None,
            },
            placeholder: true,
        }
    }
}

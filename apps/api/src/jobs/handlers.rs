//! Axum route handlers for the Jobs API.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::jobs::filter::filter_by_location;
use crate::jobs::{build_query, PAGE_SIZE};
use crate::models::job::{JobDetails, JobSearchPage};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobSearchParams {
    pub title: Option<String>,
    pub location: Option<String>,
    pub page: Option<u32>,
}

/// GET /api/v1/jobs/search?title=&location=&page=
///
/// Location is mandatory. Provider results are post-filtered by location.
pub async fn handle_search(
    State(state): State<AppState>,
    Query(params): Query<JobSearchParams>,
) -> Result<Json<JobSearchPage>, AppError> {
    let location = params
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .ok_or_else(|| AppError::Validation("location is required".to_string()))?;

    let page = params.page.unwrap_or(1);
    if page == 0 {
        return Err(AppError::Validation("page must be 1 or greater".to_string()));
    }

    let query = build_query(params.title.as_deref(), location);
    let listings = state.jobs.search(&query, page).await?;
    let has_more = listings.len() >= PAGE_SIZE;
    let raw_count = listings.len();
    let jobs = filter_by_location(listings, location);

    info!(
        %query,
        page,
        raw_count,
        kept = jobs.len(),
        "Job search completed"
    );

    Ok(Json(JobSearchPage {
        jobs,
        page,
        has_more,
    }))
}

/// GET /api/v1/jobs/:id
///
/// Best effort: unresolvable ids and provider failures yield placeholder details.
pub async fn handle_job_details(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobDetails>, AppError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::Validation("job id cannot be empty".to_string()));
    }

    let details = match state.jobs.details(id).await {
        Ok(Some(listing)) => JobDetails::resolved(listing),
        Ok(None) => {
            info!(job_id = id, "Job id not known to provider, returning placeholder");
            JobDetails::placeholder(id)
        }
        Err(e) => {
            warn!(job_id = id, "Job details lookup failed, returning placeholder: {e}");
            JobDetails::placeholder(id)
        }
    };

    Ok(Json(details))
}

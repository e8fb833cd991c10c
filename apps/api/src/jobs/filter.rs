//! Location post-filter applied to provider results.

use crate::models::job::JobListing;

/// Keeps a listing when its location contains the requested location
/// (case-insensitive). A request mentioning "remote" is also satisfied by a
/// listing flagged remote or whose location mentions remote.
pub fn matches_location(listing: &JobListing, requested: &str) -> bool {
    let requested = requested.trim().to_lowercase();
    if requested.is_empty() {
        return true;
    }

    let location = listing.location.to_lowercase();
    if location.contains(&requested) {
        return true;
    }

    requested.contains("remote") && (listing.is_remote || location.contains("remote"))
}

pub fn filter_by_location(listings: Vec<JobListing>, requested: &str) -> Vec<JobListing> {
    listings
        .into_iter()
        .filter(|listing| matches_location(listing, requested))
        .collect()
}

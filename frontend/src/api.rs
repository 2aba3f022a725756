//! Authenticated reads against the jobs API.
//!
//! Each function issues exactly one request and maps the body into the view
//! model. Any non-2xx answer becomes `FetchError::Status` without looking at
//! the body.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::config::ApiConfig;
use common::credentials::Credential;
use common::fetch::FetchError;
use common::model::job::JobSummary;
use common::model::mapping::job_summaries;
use common::model::profile::ProfileDetails;
use common::model::wire::{JobsResponse, ProfileResponse};
use common::requests::JobsQuery;

/// `GET /profile` for the owner of `credential`.
pub async fn fetch_profile(
    config: &ApiConfig,
    credential: &Credential,
) -> Result<ProfileDetails, FetchError> {
    let response = Request::get(&config.profile_url())
        .header("Authorization", &credential.bearer_header())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let payload: ProfileResponse = decode(response).await?;
    Ok(ProfileDetails::from(payload))
}

/// `GET /jobs` filtered by `query`.
pub async fn fetch_jobs(
    config: &ApiConfig,
    credential: &Credential,
    query: &JobsQuery,
) -> Result<Vec<JobSummary>, FetchError> {
    let response = Request::get(&config.jobs_url())
        .query(query.params())
        .header("Authorization", &credential.bearer_header())
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    let payload: JobsResponse = decode(response).await?;
    Ok(job_summaries(payload))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

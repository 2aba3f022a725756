//! Response bodies exactly as the jobs API sends them.
//!
//! These types are never handed to views; `mapping` converts them.

use serde::{Deserialize, Serialize};

/// Body of `GET /profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileResponse {
    pub profile_details: ProfileDetailsPayload,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDetailsPayload {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

/// Body of `GET /jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobPayload>,
    /// Count of matching jobs reported by the server; not used for paging.
    pub total: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPayload {
    pub id: String,
    pub company_logo_url: String,
    pub employment_type: String,
    pub job_description: String,
    pub location: String,
    pub package_per_annum: String,
    pub rating: f32,
    pub title: String,
}

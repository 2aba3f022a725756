use serde::{Deserialize, Serialize};

/// A job posting as the list view renders it.
///
/// Built only from a `wire::JobPayload` through `mapping`; the list of these
/// is replaced wholesale on every successful jobs read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobSummary {
    pub id: String,
    pub company_logo_url: String,
    /// Human readable label such as "Full Time", as sent by the API.
    pub employment_type: String,
    pub job_description: String,
    pub location: String,
    /// Free-form package text such as "21 LPA".
    pub package_per_annum: String,
    pub rating: f32,
    pub title: String,
}

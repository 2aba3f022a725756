//! Wire payload → view model conversions.
//!
//! Each entity has one conversion and every field is assigned by name, so a
//! renamed or dropped wire field fails to compile here instead of silently
//! rendering an empty value.

use super::job::JobSummary;
use super::profile::ProfileDetails;
use super::wire::{JobPayload, JobsResponse, ProfileDetailsPayload, ProfileResponse};

impl From<ProfileDetailsPayload> for ProfileDetails {
    fn from(payload: ProfileDetailsPayload) -> Self {
        Self {
            profile_image_url: payload.profile_image_url,
            name: payload.name,
            short_bio: payload.short_bio,
        }
    }
}

impl From<ProfileResponse> for ProfileDetails {
    fn from(response: ProfileResponse) -> Self {
        response.profile_details.into()
    }
}

impl From<JobPayload> for JobSummary {
    fn from(payload: JobPayload) -> Self {
        Self {
            id: payload.id,
            company_logo_url: payload.company_logo_url,
            employment_type: payload.employment_type,
            job_description: payload.job_description,
            location: payload.location,
            package_per_annum: payload.package_per_annum,
            rating: payload.rating,
            title: payload.title,
        }
    }
}

/// Maps every record of a jobs response, keeping server order.
pub fn job_summaries(response: JobsResponse) -> Vec<JobSummary> {
    response.jobs.into_iter().map(JobSummary::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_payload_maps_every_field() {
        let response: ProfileResponse = serde_json::from_str(
            r#"{
                "profile_details": {
                    "name": "Rahul Attuluri",
                    "profile_image_url": "https://assets.ccbp.in/frontend/react-js/male-avatar-img.png",
                    "short_bio": "Lead Software Developer and AI-ML expert"
                }
            }"#,
        )
        .unwrap();

        let details = ProfileDetails::from(response);
        assert_eq!(details.name, "Rahul Attuluri");
        assert_eq!(
            details.profile_image_url,
            "https://assets.ccbp.in/frontend/react-js/male-avatar-img.png"
        );
        assert_eq!(details.short_bio, "Lead Software Developer and AI-ML expert");
    }

    #[test]
    fn jobs_payload_maps_in_server_order() {
        let response: JobsResponse = serde_json::from_str(
            r#"{
                "jobs": [
                    {
                        "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/facebook-img.png",
                        "employment_type": "Full Time",
                        "id": "d6019453-f864-4a2f-8230-6a9642a59466",
                        "job_description": "We're in search of a Back-End Software Engineer.",
                        "location": "Bangalore",
                        "package_per_annum": "21 LPA",
                        "rating": 4,
                        "title": "Backend Engineer"
                    },
                    {
                        "company_logo_url": "https://assets.ccbp.in/frontend/react-js/jobby-app/netflix-img.png",
                        "employment_type": "Internship",
                        "id": "2b40029d-e5a5-48cc-84a6-b6e12d25625d",
                        "job_description": "Frontend internship.",
                        "location": "Delhi",
                        "package_per_annum": "8 LPA",
                        "rating": 3.5,
                        "title": "Frontend Intern"
                    }
                ],
                "total": 2
            }"#,
        )
        .unwrap();
        assert_eq!(response.total, Some(2));

        let jobs = job_summaries(response);
        assert_eq!(jobs.len(), 2);

        let first = &jobs[0];
        assert_eq!(first.id, "d6019453-f864-4a2f-8230-6a9642a59466");
        assert_eq!(
            first.company_logo_url,
            "https://assets.ccbp.in/frontend/react-js/jobby-app/facebook-img.png"
        );
        assert_eq!(first.employment_type, "Full Time");
        assert_eq!(
            first.job_description,
            "We're in search of a Back-End Software Engineer."
        );
        assert_eq!(first.location, "Bangalore");
        assert_eq!(first.package_per_annum, "21 LPA");
        assert_eq!(first.rating, 4.0);
        assert_eq!(first.title, "Backend Engineer");

        assert_eq!(jobs[1].title, "Frontend Intern");
        assert_eq!(jobs[1].rating, 3.5);
    }

    #[test]
    fn missing_total_is_tolerated() {
        let response: JobsResponse = serde_json::from_str(r#"{"jobs": []}"#).unwrap();
        assert_eq!(response.total, None);
        assert!(job_summaries(response).is_empty());
    }

    #[test]
    fn record_missing_a_field_is_rejected() {
        let result = serde_json::from_str::<JobsResponse>(
            r#"{"jobs": [{"id": "1", "title": "Only a title"}]}"#,
        );
        assert!(result.is_err());
    }
}

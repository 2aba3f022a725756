//! Which variant of a region the page shows for a given fetch state.

use super::{FetchStatus, Fetched};
use crate::model::job::JobSummary;
use crate::model::profile::ProfileDetails;

/// Render state of the jobs region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JobsView<'a> {
    /// No fetch has been issued yet.
    Initial,
    Loading,
    /// Latest fetch succeeded with zero jobs.
    Empty,
    /// Latest fetch succeeded with at least one job.
    Listing(&'a [JobSummary]),
    /// Latest fetch failed; whatever list was shown before is hidden.
    Failure,
}

impl<'a> JobsView<'a> {
    pub fn new(status: FetchStatus, jobs: &'a [JobSummary]) -> Self {
        match status {
            FetchStatus::Initial => Self::Initial,
            FetchStatus::InProgress => Self::Loading,
            FetchStatus::Success if jobs.is_empty() => Self::Empty,
            FetchStatus::Success => Self::Listing(jobs),
            FetchStatus::Failure => Self::Failure,
        }
    }

    pub fn of(jobs: &'a Fetched<Vec<JobSummary>>) -> Self {
        Self::new(jobs.status(), jobs.data())
    }
}

/// Render state of the profile card region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileView<'a> {
    Initial,
    Loading,
    Loaded(&'a ProfileDetails),
    Failure,
}

impl<'a> ProfileView<'a> {
    pub fn new(status: FetchStatus, profile: &'a ProfileDetails) -> Self {
        match status {
            FetchStatus::Initial => Self::Initial,
            FetchStatus::InProgress => Self::Loading,
            FetchStatus::Success => Self::Loaded(profile),
            FetchStatus::Failure => Self::Failure,
        }
    }

    pub fn of(profile: &'a Fetched<ProfileDetails>) -> Self {
        Self::new(profile.status(), profile.data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchError;
    use crate::model::filters::FilterState;
    use crate::model::mapping::job_summaries;
    use crate::model::wire::{JobPayload, JobsResponse};
    use crate::requests::JobsQuery;
    use proptest::prelude::*;

    fn payload(id: &str, title: &str, employment_type: &str) -> JobPayload {
        JobPayload {
            id: id.to_string(),
            company_logo_url: format!("https://logos.example/{id}.png"),
            employment_type: employment_type.to_string(),
            job_description: format!("{title} role"),
            location: "Hyderabad".to_string(),
            package_per_annum: "12 LPA".to_string(),
            rating: 4.0,
            title: title.to_string(),
        }
    }

    fn dataset() -> Vec<JobPayload> {
        vec![
            payload("1", "Rust Developer", "Full Time"),
            payload("2", "Data Analyst", "Part Time"),
            payload("3", "Frontend Intern", "Internship"),
        ]
    }

    /// Stand-in for the jobs endpoint: filters a fixed dataset by search text.
    fn serve(query: &JobsQuery, records: &[JobPayload]) -> JobsResponse {
        let needle = query.search.to_lowercase();
        let jobs: Vec<JobPayload> = records
            .iter()
            .filter(|job| job.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        JobsResponse {
            total: Some(jobs.len() as u32),
            jobs,
        }
    }

    fn run_jobs_fetch(
        jobs: &mut Fetched<Vec<JobSummary>>,
        filters: &FilterState,
        outcome: Result<&[JobPayload], FetchError>,
    ) {
        let ticket = jobs.begin();
        let query = JobsQuery::from(filters);
        let result = outcome.map(|records| job_summaries(serve(&query, records)));
        jobs.settle(ticket, result);
    }

    #[test]
    fn initial_state_renders_nothing() {
        let jobs = Fetched::<Vec<JobSummary>>::default();
        assert_eq!(JobsView::of(&jobs), JobsView::Initial);

        let profile = Fetched::<ProfileDetails>::default();
        assert_eq!(ProfileView::of(&profile), ProfileView::Initial);
    }

    #[test]
    fn in_flight_fetch_shows_loader() {
        let mut jobs = Fetched::<Vec<JobSummary>>::default();
        jobs.begin();
        assert_eq!(JobsView::of(&jobs), JobsView::Loading);
    }

    #[test]
    fn unfiltered_fetch_lists_every_job() {
        let mut jobs = Fetched::default();
        run_jobs_fetch(&mut jobs, &FilterState::default(), Ok(&dataset()));

        match JobsView::of(&jobs) {
            JobsView::Listing(items) => {
                assert_eq!(items.len(), 3);
                assert_eq!(items[0].title, "Rust Developer");
            }
            other => panic!("expected listing, got {other:?}"),
        }
    }

    #[test]
    fn search_without_matches_shows_no_jobs_view() {
        let mut jobs = Fetched::default();
        let mut filters = FilterState::default();
        filters.set_search_input("astronaut");

        run_jobs_fetch(&mut jobs, &filters, Ok(&dataset()));
        assert_eq!(jobs.status(), FetchStatus::Success);
        assert_eq!(JobsView::of(&jobs), JobsView::Empty);
    }

    #[test]
    fn failure_hides_the_previous_list() {
        let mut jobs = Fetched::default();
        run_jobs_fetch(&mut jobs, &FilterState::default(), Ok(&dataset()));
        assert!(matches!(JobsView::of(&jobs), JobsView::Listing(_)));

        run_jobs_fetch(
            &mut jobs,
            &FilterState::default(),
            Err(FetchError::Status(500)),
        );
        assert_eq!(JobsView::of(&jobs), JobsView::Failure);
        assert_eq!(jobs.data().len(), 3);
    }

    #[test]
    fn retry_after_failure_recovers() {
        let mut jobs = Fetched::default();
        run_jobs_fetch(
            &mut jobs,
            &FilterState::default(),
            Err(FetchError::Network("offline".into())),
        );
        assert_eq!(JobsView::of(&jobs), JobsView::Failure);

        run_jobs_fetch(&mut jobs, &FilterState::default(), Ok(&dataset()));
        assert!(matches!(JobsView::of(&jobs), JobsView::Listing(items) if items.len() == 3));
    }

    #[test]
    fn profile_failure_leaves_jobs_untouched() {
        let mut profile = Fetched::<ProfileDetails>::default();
        let mut jobs = Fetched::default();

        let profile_ticket = profile.begin();
        run_jobs_fetch(&mut jobs, &FilterState::default(), Ok(&dataset()));
        profile.settle(profile_ticket, Err(FetchError::Status(401)));

        assert_eq!(ProfileView::of(&profile), ProfileView::Failure);
        assert!(matches!(JobsView::of(&jobs), JobsView::Listing(_)));
    }

    #[test]
    fn profile_success_exposes_details() {
        let mut profile = Fetched::<ProfileDetails>::default();
        let ticket = profile.begin();
        let details = ProfileDetails {
            profile_image_url: "https://img.example/me.png".into(),
            name: "Asha".into(),
            short_bio: "Systems programmer".into(),
        };
        profile.settle::<FetchError>(ticket, Ok(details.clone()));
        assert_eq!(ProfileView::of(&profile), ProfileView::Loaded(&details));
    }

    #[test]
    fn out_of_order_responses_keep_latest_trigger() {
        let mut jobs = Fetched::<Vec<JobSummary>>::default();
        let records = dataset();

        let mut filters = FilterState::default();
        filters.set_search_input("rust");
        let older = (jobs.begin(), JobsQuery::from(&filters));

        filters.set_search_input("");
        let newer = (jobs.begin(), JobsQuery::from(&filters));

        let newer_result: Result<_, FetchError> =
            Ok(job_summaries(serve(&newer.1, &records)));
        let older_result: Result<_, FetchError> =
            Ok(job_summaries(serve(&older.1, &records)));

        assert!(jobs.settle(newer.0, newer_result));
        assert!(!jobs.settle(older.0, older_result));
        assert!(matches!(JobsView::of(&jobs), JobsView::Listing(items) if items.len() == 3));
    }

    fn filter_state() -> impl Strategy<Value = FilterState> {
        (
            "[a-z ]{0,12}",
            proptest::collection::vec(
                prop::sample::select(vec!["FULLTIME", "PARTTIME", "FREELANCE", "INTERNSHIP"]),
                0..4,
            ),
            prop::sample::select(vec!["", "1000000", "2000000", "3000000", "4000000"]),
        )
            .prop_map(|(search, types, package)| {
                let mut filters = FilterState::default();
                filters.set_search_input(search);
                for id in types {
                    filters.set_employment_type(id, true);
                }
                filters.select_minimum_package(package);
                filters
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 128,
            .. ProptestConfig::default()
        })]

        #[test]
        fn every_settled_fetch_leaves_loading(filters in filter_state(), fail in any::<bool>()) {
            let mut jobs = Fetched::default();
            let records = dataset();
            let outcome = if fail {
                Err(FetchError::Status(500))
            } else {
                Ok(records.as_slice())
            };
            run_jobs_fetch(&mut jobs, &filters, outcome);

            let view = JobsView::of(&jobs);
            prop_assert!(matches!(
                view,
                JobsView::Empty | JobsView::Listing(_) | JobsView::Failure
            ));
            if let JobsView::Listing(items) = view {
                prop_assert!(!items.is_empty());
            }
        }

        #[test]
        fn same_filters_same_dataset_same_list(filters in filter_state()) {
            let records = dataset();
            let mut jobs = Fetched::default();

            run_jobs_fetch(&mut jobs, &filters, Ok(&records));
            let first = jobs.data().clone();
            run_jobs_fetch(&mut jobs, &filters, Ok(&records));

            prop_assert_eq!(&first, jobs.data());
        }
    }
}

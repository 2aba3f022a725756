//! Component state for the jobs page.

use common::fetch::Fetched;
use common::model::filters::FilterState;
use common::model::job::JobSummary;
use common::model::profile::ProfileDetails;

/// State container for the `JobsComponent`.
///
/// Fields are `pub` because `update` and `view` live in sibling modules.
pub struct JobsComponent {
    /// Search text and filter selections; changed only by user input.
    pub filters: FilterState,

    /// Profile card fetch, status and data together.
    pub profile: Fetched<ProfileDetails>,

    /// Jobs list fetch, status and data together.
    pub jobs: Fetched<Vec<JobSummary>>,

    /// Guard so the initial fetches run once.
    pub loaded: bool,
}

impl JobsComponent {
    pub fn new() -> Self {
        Self {
            filters: FilterState::default(),
            profile: Fetched::default(),
            jobs: Fetched::default(),
            loaded: false,
        }
    }
}

use common::fetch::{FetchError, Ticket};
use common::model::filters::FilterEvent;
use common::model::job::JobSummary;
use common::model::profile::ProfileDetails;

pub enum Msg {
    FetchProfile,
    ProfileSettled(Ticket, Result<ProfileDetails, FetchError>),
    FetchJobs,
    JobsSettled(Ticket, Result<Vec<JobSummary>, FetchError>),
    Filter(FilterEvent),
}

//! Properties for the `JobsComponent`.

use common::config::ApiConfig;
use common::credentials::Credential;
use yew::prelude::*;

/// Everything the jobs page needs from outside: where the API lives and the
/// bearer credential to send with each read.
#[derive(Properties, PartialEq, Clone)]
pub struct JobsProps {
    pub config: ApiConfig,

    /// Passed into every fetch; the page never reads cookies itself.
    pub credential: Credential,
}

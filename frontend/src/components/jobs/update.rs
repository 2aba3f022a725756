//! Update function for the jobs page.
//!
//! Mount and Retry start a jobs request directly; search and filter events go
//! through `FilterState::apply`, which decides whether they call for one.
//! Each request is built from a snapshot of the current filters. Its ticket
//! travels with the response message, and `Fetched::settle` drops responses
//! whose ticket has been superseded.

use gloo_console::{debug, warn};
use yew::platform::spawn_local;
use yew::prelude::*;

use common::requests::JobsQuery;

use super::messages::Msg;
use super::state::JobsComponent;
use crate::api;

/// Central update function for the component.
///
/// Returns `true` when the view has to re-render.
pub fn update(component: &mut JobsComponent, ctx: &Context<JobsComponent>, msg: Msg) -> bool {
    match msg {
        Msg::FetchProfile => {
            let ticket = component.profile.begin();
            let props = ctx.props().clone();
            let link = ctx.link().clone();
            debug!(format!("profile fetch {} started", ticket));

            spawn_local(async move {
                let result = api::fetch_profile(&props.config, &props.credential).await;
                link.send_message(Msg::ProfileSettled(ticket, result));
            });
            true
        }
        Msg::ProfileSettled(ticket, result) => {
            if let Err(err) = &result {
                warn!(format!("profile fetch {} failed: {}", ticket, err));
            }
            let applied = component.profile.settle(ticket, result);
            if !applied {
                debug!(format!("profile fetch {} superseded, response dropped", ticket));
            }
            applied
        }
        Msg::FetchJobs => {
            start_jobs_fetch(component, ctx);
            true
        }
        Msg::JobsSettled(ticket, result) => {
            if let Err(err) = &result {
                warn!(format!("jobs fetch {} failed: {}", ticket, err));
            }
            let applied = component.jobs.settle(ticket, result);
            if !applied {
                debug!(format!("jobs fetch {} superseded, response dropped", ticket));
            }
            applied
        }
        Msg::Filter(event) => {
            if component.filters.apply(event) {
                start_jobs_fetch(component, ctx);
            }
            true
        }
    }
}

/// Issues one jobs request for the filters as they are right now.
fn start_jobs_fetch(component: &mut JobsComponent, ctx: &Context<JobsComponent>) {
    let ticket = component.jobs.begin();
    let query = JobsQuery::from(&component.filters);
    let props = ctx.props().clone();
    let link = ctx.link().clone();
    debug!(format!("jobs fetch {} started: {:?}", ticket, query));

    spawn_local(async move {
        let result = api::fetch_jobs(&props.config, &props.credential, &query).await;
        link.send_message(Msg::JobsSettled(ticket, result));
    });
}

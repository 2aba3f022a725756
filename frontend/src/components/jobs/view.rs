//! View rendering for the jobs page.
//!
//! The left column holds the profile card and the filters; the right column
//! holds the search bar and whichever `JobsView` variant the jobs fetch is in.

use common::fetch::JobsView;
use common::model::filters::{FilterEvent, EMPLOYMENT_TYPES, SALARY_RANGES};
use common::model::job::JobSummary;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::JobsComponent;
use crate::components::filter_group::FilterGroup;
use crate::components::header::Header;
use crate::components::job_item::JobItem;
use crate::components::loader::Loader;
use crate::components::profile_card::ProfileCard;

const FAILURE_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/failure-img.png";
const NO_JOBS_IMAGE_URL: &str = "https://assets.ccbp.in/frontend/react-js/no-jobs-img.png";

pub fn view(component: &JobsComponent, ctx: &Context<JobsComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="route-bg-container">
            <Header />
            <div class="job-route-container">
                { build_side_column(component, link) }
                <div class="search-job-items-container">
                    { build_search_bar(component, link) }
                    { build_jobs_region(component, link) }
                </div>
            </div>
        </div>
    }
}

fn build_side_column(component: &JobsComponent, link: &Scope<JobsComponent>) -> Html {
    html! {
        <div class="profile-filter-group-container">
            <ProfileCard
                status={component.profile.status()}
                details={component.profile.data().clone()}
                on_retry={link.callback(|_: MouseEvent| Msg::FetchProfile)}
            />
            <FilterGroup
                employment_types={EMPLOYMENT_TYPES}
                salary_ranges={SALARY_RANGES}
                checked_employment_types={component.filters.employment_types().to_vec()}
                selected_minimum_package={component.filters.minimum_package().to_string()}
                on_employment_type_change={link.callback(|(id, checked): (String, bool)| {
                    Msg::Filter(FilterEvent::EmploymentTypeToggled { id, checked })
                })}
                on_minimum_package_change={link.callback(|id: String| {
                    Msg::Filter(FilterEvent::MinimumPackageSelected(id))
                })}
            />
        </div>
    }
}

/// Search input plus button. Typing only edits the filter state; the request
/// goes out on the button or on Enter.
fn build_search_bar(component: &JobsComponent, link: &Scope<JobsComponent>) -> Html {
    html! {
        <div class="searchbar-container">
            <input
                type="search"
                name="searchInput"
                class="search-input"
                placeholder="Search"
                value={component.filters.search_input().to_string()}
                oninput={link.callback(|e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    Msg::Filter(FilterEvent::SearchEdited(input.value()))
                })}
                onkeydown={link.batch_callback(|e: KeyboardEvent| {
                    if e.key() == "Enter" {
                        vec![Msg::Filter(FilterEvent::SearchSubmitted)]
                    } else {
                        vec![]
                    }
                })}
            />
            <div class="search-icon-container">
                <button
                    type="button"
                    class="search-button"
                    data-testid="searchButton"
                    onclick={link.callback(|_| Msg::Filter(FilterEvent::SearchSubmitted))}
                >
                    <span class="search-icon">{ "⌕" }</span>
                </button>
            </div>
        </div>
    }
}

fn build_jobs_region(component: &JobsComponent, link: &Scope<JobsComponent>) -> Html {
    match JobsView::of(&component.jobs) {
        JobsView::Initial => html! {},
        JobsView::Loading => html! { <Loader /> },
        JobsView::Empty => build_no_jobs_view(),
        JobsView::Listing(jobs) => build_job_list(jobs),
        JobsView::Failure => build_failure_view(link),
    }
}

fn build_job_list(jobs: &[JobSummary]) -> Html {
    html! {
        <ul class="jobs-list-items-container">
            { for jobs.iter().map(|job| html! { <JobItem key={job.id.clone()} job={job.clone()} /> }) }
        </ul>
    }
}

fn build_failure_view(link: &Scope<JobsComponent>) -> Html {
    html! {
        <div class="jobs-failure-view-container">
            <img src={FAILURE_IMAGE_URL} alt="failure view" />
            <h1>{ "Oops! Something Went Wrong" }</h1>
            <p>{ "We cannot seem to find the page you are looking for." }</p>
            <button type="button" class="retry-button" onclick={link.callback(|_| Msg::FetchJobs)}>
                { "Retry" }
            </button>
        </div>
    }
}

fn build_no_jobs_view() -> Html {
    html! {
        <div class="no-jobs-view-container jobs-failure-view-container">
            <img src={NO_JOBS_IMAGE_URL} alt="no jobs" />
            <h1>{ "No Jobs Found" }</h1>
            <p>{ "We could not find any jobs. Try other filters." }</p>
        </div>
    }
}

use common::model::job::JobSummary;
use yew::{html, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct JobItemProps {
    pub job: JobSummary,
}

/// One row of the jobs list. Pure display of an already mapped `JobSummary`.
pub struct JobItem;

impl Component for JobItem {
    type Message = ();
    type Properties = JobItemProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JobItem
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let job = &ctx.props().job;

        html! {
            <li class="job-item">
                <div class="logo-title-container">
                    <img class="company-logo" src={job.company_logo_url.clone()} alt="company logo" />
                    <div>
                        <h1 class="job-title">{ job.title.clone() }</h1>
                        <div class="rating-container">
                            <span class="star">{ "★" }</span>
                            <p class="rating">{ job.rating.to_string() }</p>
                        </div>
                    </div>
                </div>
                <div class="location-package-container">
                    <div class="location-type-container">
                        <p class="location">{ job.location.clone() }</p>
                        <p class="employment-type">{ job.employment_type.clone() }</p>
                    </div>
                    <p class="package">{ job.package_per_annum.clone() }</p>
                </div>
                <hr class="separator" />
                <h1 class="description-heading">{ "Description" }</h1>
                <p class="job-description">{ job.job_description.clone() }</p>
            </li>
        }
    }
}

//! Profile card: avatar, name and short bio of the signed-in user.
//!
//! Rendering follows `ProfileView`, so the card has its own loader and its own
//! retry button independent of the jobs region.

use common::fetch::{FetchStatus, ProfileView};
use common::model::profile::ProfileDetails;
use yew::prelude::*;

use crate::components::loader::Loader;

#[derive(Properties, PartialEq)]
pub struct ProfileCardProps {
    pub status: FetchStatus,
    pub details: ProfileDetails,
    /// Re-runs the profile fetch.
    pub on_retry: Callback<MouseEvent>,
}

pub struct ProfileCard;

impl Component for ProfileCard {
    type Message = ();
    type Properties = ProfileCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProfileCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();

        match ProfileView::new(props.status, &props.details) {
            ProfileView::Initial => html! {},
            ProfileView::Loading => html! { <Loader /> },
            ProfileView::Loaded(details) => html! {
                <div class="profile-container">
                    <img class="profile-image" src={details.profile_image_url.clone()} alt="profile" />
                    <h1 class="profile-name">{ details.name.clone() }</h1>
                    <p class="short-bio">{ details.short_bio.clone() }</p>
                </div>
            },
            ProfileView::Failure => html! {
                <div class="profile-failure-container">
                    <button type="button" class="retry-button" onclick={props.on_retry.clone()}>
                        { "Retry" }
                    </button>
                </div>
            },
        }
    }
}

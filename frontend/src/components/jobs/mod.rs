//! Jobs page: profile card, filters, search bar and the job list.
//!
//! The `Component` implementation delegates to `update::update` and
//! `view::view`. On first render both the profile and the jobs fetch are
//! started.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::JobsProps;
pub use state::JobsComponent;

impl Component for JobsComponent {
    type Message = Msg;
    type Properties = JobsProps;

    fn create(_ctx: &Context<Self>) -> Self {
        JobsComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message_batch(vec![Msg::FetchProfile, Msg::FetchJobs]);
        }
    }
}

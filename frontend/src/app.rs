use crate::components::jobs::JobsComponent;
use crate::credentials::read_credential;
use common::config::ApiConfig;
use common::credentials::Credential;
use yew::{html, Component, Context, Html};

/// Root component. Resolves configuration and the bearer credential once and
/// hands both to the jobs page.
pub struct App {
    config: ApiConfig,
    credential: Credential,
}

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let config = ApiConfig::from_build_env();
        let credential = read_credential(&config.credential_cookie);
        if credential.is_empty() {
            gloo_console::warn!(format!("no `{}` cookie found", config.credential_cookie));
        }
        Self { config, credential }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <JobsComponent config={self.config.clone()} credential={self.credential.clone()} />
            </div>
        }
    }
}

use yew::{html, Component, Context, Html};

const LOGO_URL: &str = "https://assets.ccbp.in/frontend/react-js/logo-img.png";

pub struct Header;

impl Component for Header {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Header
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <nav class="header">
                <img class="website-logo" src={LOGO_URL} alt="website logo" />
            </nav>
        }
    }
}

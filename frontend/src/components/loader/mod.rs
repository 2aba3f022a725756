use yew::{html, Component, Context, Html};

/// Spinner shown while a fetch is in flight.
pub struct Loader;

impl Component for Loader {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Loader
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="loader-container" data-testid="loader">
                <div class="spin" style="width:48px;height:48px;border:6px solid #ccc;border-top-color:#ffffff;border-radius:50%;animation:spin 1s linear infinite;"></div>
                <style>{r#"
                    @keyframes spin { from { transform: rotate(0deg); } to { transform: rotate(360deg); } }
                "#}</style>
            </div>
        }
    }
}

use crate::app::App;

mod api;
mod app;
mod components;
mod credentials;

fn main() {
    yew::Renderer::<App>::new().render();
}

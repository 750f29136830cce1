mod api;
mod app;
mod components;
mod config;
mod containers;
mod filters;
mod hooks;
mod pages;
mod routes;
mod session;
mod validators;

#[cfg(test)]
mod api_test;
#[cfg(test)]
mod routes_test;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    std::panic::set_hook(Box::new(|info| {
        web_sys::console::error_1(&format!("Panic: {info}").into());
    }));

    web_sys::console::log_1(&"Iniciando portal institucional".into());

    Renderer::<Root>::new().render();
}

mod components;
mod hooks;
mod pages;
mod providers;
mod routes;

use yew::prelude::*;
use yew_router::prelude::*;

use providers::{SessionProvider, ThemeProvider};
use routes::{Route, switch};

#[function_component(App)]
fn app() -> Html {
    html! {
        <ThemeProvider>
            <SessionProvider>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </SessionProvider>
        </ThemeProvider>
    }
}

fn main() {
    fasal::log::setup().expect("Failed to setup logging");
    fasal::info!("Starting AI-Fasal frontend");
    yew::Renderer::<App>::new().render();
}

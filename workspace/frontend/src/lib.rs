use yew::prelude::*;
use yew_router::prelude::*;

pub mod api_client;
mod components;
mod geolocation;
pub mod hooks;
pub mod settings;

use components::common::toast::ToastProvider;
use components::dashboard::Dashboard;

/// Application routes. The dashboard is the whole app; anything else 404s.
#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Home => html! { <Dashboard /> },
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <main class="not-found"><h1>{"404 Not Found"}</h1></main> }
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <ToastProvider>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    // Initialize settings first
    settings::init_settings();

    // Initialize logger with settings
    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Skycast Starting ===");
    log::info!("Application settings: {:?}", settings);
    log::debug!("Forecast API: {}", settings.forecast_api);
    log::debug!("Debug mode: {}", settings.debug_mode);

    log::trace!("Initializing Yew renderer");
    yew::Renderer::<App>::new().render();
    log::info!("Application initialized successfully");
}

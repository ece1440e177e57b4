use crate::config::Config;
use crate::version::Version;
use log::{debug, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod api;
pub mod components;
pub mod config;
pub mod state;
pub mod version;
pub mod pages {
    pub mod dashboard;
    pub mod not_found;
}

use pages::{dashboard::Dashboard, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("{} starting, API at {}", Version::full(), Config::api_base_url());

    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Trunk calls this on load
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}

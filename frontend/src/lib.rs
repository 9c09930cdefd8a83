mod components;
mod environment;
mod fetch;
mod pages;
mod routes;

use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::Register;

pub const VERSION_STR: &str = env!("CARGO_PKG_VERSION");

#[function_component]
fn AppRoot() -> Html {
    html! {
        <BrowserRouter>
            <div class="app-host">
                <Switch<Route> render={switch} />
            </div>
        </BrowserRouter>
    }
}

#[must_use]
pub const fn not(b: bool) -> bool {
    !b
}

#[allow(clippy::needless_pass_by_value)]
fn switch(route: Route) -> Html {
    match route {
        Route::Register => {
            html! { <Register /> }
        }
        Route::NotFound => {
            html! { <Redirect<Route> to={Route::Register} /> }
        }
    }
}

pub fn run_app() {
    console_error_panic_hook::set_once();

    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    log::info!("registration v{VERSION_STR}, api: {}", environment::REGISTRATION_API);

    yew::Renderer::<AppRoot>::new().render();
}

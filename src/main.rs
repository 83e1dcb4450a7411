use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod submission;
mod form {
    pub mod validator;
    pub mod rota;
    pub mod state;
    pub mod upload_form;
}
mod counter {
    pub mod store;
    pub mod context;
}
mod components {
    pub mod header;
    pub mod value_proposition;
    pub mod video_section;
    pub mod privacy_notice;
}
mod pages {
    pub mod home;
}

use counter::context::CounterProvider;
use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <CounterProvider>
                <Switch<Route> render={switch} />
            </CounterProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

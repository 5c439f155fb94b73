use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod interactions {
    pub mod counter;
    pub mod form;
    pub mod motion;
    pub mod nav;
    pub mod notify;
    pub mod page;
    pub mod throttle;
    pub mod typing;
    pub mod visibility;
}
mod hooks {
    pub mod frames;
    pub mod scroll;
    pub mod viewport;
}
mod components {
    pub mod contact_form;
    pub mod navbar;
    pub mod notification;
    pub mod reveal;
    pub mod ripple_button;
    pub mod stat_counter;
    pub mod typed_title;
}
mod pages {
    pub mod landing;
    pub mod studio;
}

use components::notification::NotificationProvider;
use pages::{
    landing::Landing,
    studio::Studio,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/bluewave")]
    Studio,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::Studio => {
            info!("Rendering Studio page");
            html! { <Studio /> }
        },
        Route::NotFound => {
            info!("Unknown route, rendering Landing page");
            html! { <Landing /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <NotificationProvider>
                <Switch<Route> render={switch} />
            </NotificationProvider>
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

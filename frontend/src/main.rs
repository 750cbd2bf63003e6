use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod booking;
mod config;
mod contact;
mod content;
mod dom;
mod hooks;
mod offers;
mod components {
    pub mod booking_form;
    pub mod footer;
    pub mod offers_carousel;
    pub mod overlay;
    pub mod site_nav;
}
mod pages {
    pub mod booking;
    pub mod landing;
    pub mod not_found;
}

use components::footer::Footer;
use pages::{
    booking::BookingPage,
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/booking")]
    Booking,
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
        Route::Booking => {
            info!("Rendering Booking page");
            html! { <BookingPage /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
            <Footer />
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

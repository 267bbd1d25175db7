use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod faq;
pub mod install_link;
pub mod pages;
pub mod utils;

use pages::landing::Landing;

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
        // Anything unknown still gets the landing page
        Route::Home | Route::NotFound => html! { <Landing /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod hooks;
mod motion;
mod components {
    pub mod animated_section;
    pub mod footer;
    pub mod icon;
    pub mod nav;
    pub mod pricing_tabs;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use components::{footer::Footer, nav::Nav};
use hooks::ScrollProvider;
use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/categories")]
    Categories,
    #[at("/category/:slug")]
    Category { slug: String },
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/privacy")]
    Privacy,
    #[at("/terms")]
    Terms,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        other => {
            info!("No page for {}, rendering NotFound", other.to_path());
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <ScrollProvider>
                <Nav />
                <Switch<Route> render={switch} />
                <Footer />
            </ScrollProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting OceanInk");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linked_paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/"), Some(Route::Home));
        assert_eq!(Route::recognize("/about"), Some(Route::About));
        assert_eq!(
            Route::recognize("/category/poetry"),
            Some(Route::Category { slug: "poetry".to_string() })
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/pricing/enterprise"), Some(Route::NotFound));
    }

    #[test]
    fn category_route_round_trips_slug() {
        let route = Route::Category { slug: "non-fiction".to_string() };
        assert_eq!(route.to_path(), "/category/non-fiction");
    }
}

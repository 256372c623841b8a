use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::auth::SessionState;
use crate::containers::Header;
use crate::pages::{HomePage, LoginPage, RegisterPage, SavedPage};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/saved")]
    Saved,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
struct RouteViewProps {
    route: MainRoute,
}

#[function_component(RouteView)]
fn route_view(props: &RouteViewProps) -> Html {
    let signed_in = use_selector(|state: &SessionState| state.user_info.is_some());

    match props.route {
        MainRoute::Login => {
            if *signed_in {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <LoginPage /> }
            }
        }
        MainRoute::Register => {
            if *signed_in {
                html! { <Redirect<MainRoute> to={MainRoute::Home} /> }
            } else {
                html! { <RegisterPage /> }
            }
        }
        MainRoute::Home => {
            if !*signed_in {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <>
                    <Header />
                    <HomePage />
                </>
            }
        }
        MainRoute::Saved => {
            if !*signed_in {
                return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
            }
            html! {
                <>
                    <Header />
                    <SavedPage />
                </>
            }
        }
        MainRoute::NotFound => {
            html! {
                <>
                    <Header />
                    <div class="flex flex-col items-center p-12">
                        <h2 class="text-2xl font-bold">{"Page not found"}</h2>
                    </div>
                </>
            }
        }
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    html! { <RouteView {route} /> }
}

use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod consent;
mod contact;
mod motion;
mod components {
    pub mod consent_banner;
    pub mod footer;
    pub mod nav;
    pub mod notification;
}
mod pages {
    pub mod home;
    pub mod legal;
    pub mod sections;
}

use components::consent_banner::CookieBanner;
use consent::ConsentChoice;
use pages::{
    home::Home,
    legal::{Cookies, NotFound, Privacy, Terms},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/cookies")]
    Cookies,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <Terms /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <Privacy /> }
        }
        Route::Cookies => {
            info!("Rendering Cookies page");
            html! { <Cookies /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Consent read from storage before the first render.
    pub initial_consent: Option<ConsentChoice>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let initial_consent = props.initial_consent;
    let consent_choice = use_state(move || initial_consent);

    let on_choice = {
        let consent_choice = consent_choice.clone();
        Callback::from(move |choice: ConsentChoice| {
            info!("Cookie consent: {:?}", choice);
            consent::store(choice);
            consent_choice.set(Some(choice));
        })
    };

    html! {
        <BrowserRouter>
            <style>
                {r#"
                    * {
                        margin: 0;
                        padding: 0;
                        box-sizing: border-box;
                    }
                    body {
                        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                        background: #0A0A0A;
                        color: #FFFFFF;
                        line-height: 1.5;
                        -webkit-font-smoothing: antialiased;
                    }
                "#}
            </style>
            <Switch<Route> render={switch} />
            <CookieBanner choice={*consent_choice} {on_choice} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    let initial_consent = consent::load();
    info!("Starting application, stored consent: {:?}", initial_consent);
    yew::Renderer::<App>::with_props(AppProps { initial_consent }).render();
}

use yew::prelude::*;
use yew_router::prelude::*;

use crate::consent::{banner_needed, ConsentChoice};
use crate::Route;

/// The notice belongs to the single-page layout, not the legal pages.
pub fn shown_on(route: Option<&Route>) -> bool {
    matches!(route, Some(Route::Home))
}

#[derive(Properties, PartialEq)]
pub struct CookieBannerProps {
    pub choice: Option<ConsentChoice>,
    pub on_choice: Callback<ConsentChoice>,
}

#[function_component(CookieBanner)]
pub fn cookie_banner(props: &CookieBannerProps) -> Html {
    let route = use_route::<Route>();
    if !shown_on(route.as_ref()) || !banner_needed(props.choice) {
        return html! {};
    }

    let on_decline = {
        let on_choice = props.on_choice.clone();
        Callback::from(move |_: MouseEvent| on_choice.emit(ConsentChoice::Declined))
    };
    let on_accept = {
        let on_choice = props.on_choice.clone();
        Callback::from(move |_: MouseEvent| on_choice.emit(ConsentChoice::Accepted))
    };

    html! {
        <div class="cookie-banner">
            <style>
                {r#"
                    .cookie-banner {
                        position: fixed;
                        bottom: 0;
                        left: 0;
                        right: 0;
                        background: rgba(0, 0, 0, 0.9);
                        color: white;
                        padding: 1rem;
                        z-index: 1000;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 1rem;
                        animation: bannerUp 0.3s ease-out;
                    }
                    .cookie-banner p {
                        margin: 0;
                        font-size: 0.9rem;
                    }
                    .cookie-buttons {
                        display: flex;
                        gap: 1rem;
                    }
                    .cookie-buttons button {
                        padding: 0.5rem 1rem;
                        border-radius: 4px;
                        cursor: pointer;
                        font-size: 0.9rem;
                        color: white;
                        background: transparent;
                        border: 1px solid white;
                        transition: all 0.2s ease;
                    }
                    .cookie-buttons button:hover {
                        transform: translateY(-2px);
                        background: rgba(255, 255, 255, 0.1);
                    }
                    .cookie-buttons button.primary {
                        background: #4A90E2;
                        border-color: #4A90E2;
                    }
                    .cookie-buttons button.primary:hover {
                        background: #357ABD;
                    }
                    @keyframes bannerUp {
                        from { transform: translateY(100px); }
                        to { transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .cookie-banner {
                            flex-direction: column;
                            text-align: center;
                        }
                    }
                "#}
            </style>
            <p>
                {"We use cookies to enhance your experience. By continuing to visit this site you agree to our use of cookies."}
            </p>
            <div class="cookie-buttons">
                <button onclick={on_decline}>{"Decline"}</button>
                <button class="primary" onclick={on_accept}>{"Accept"}</button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_home_page_carries_the_notice() {
        assert!(shown_on(Some(&Route::Home)));
        for route in [Route::Terms, Route::Privacy, Route::Cookies, Route::NotFound] {
            assert!(!shown_on(Some(&route)));
        }
        assert!(!shown_on(None));
    }
}

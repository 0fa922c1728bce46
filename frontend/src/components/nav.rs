use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

/// Section anchors shown in the navigation bar, in page order.
pub const SECTIONS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("services", "Services"),
    ("portfolio", "Work"),
    ("contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let window = web_sys::window();
            let listener = window.clone().map(|window| {
                let scroll_window = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = scroll_window.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 50.0);
                }) as Box<dyn FnMut()>);
                if let Err(e) = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                ) {
                    warn!("Could not attach nav scroll listener: {:?}", e);
                }
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    if let Err(e) = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    ) {
                        warn!("Could not detach nav scroll listener: {:?}", e);
                    }
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 1000;
                        display: flex;
                        justify-content: center;
                        background: #0A0A0A;
                        backdrop-filter: blur(10px);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.05);
                        transition: box-shadow 0.3s ease;
                        animation: navDrop 0.5s ease-out;
                    }
                    .top-nav.scrolled {
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                    }
                    .nav-content {
                        max-width: 1400px;
                        width: 100%;
                        margin: 0 2rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        background: linear-gradient(135deg, #00B894 0%, #00A3B8 100%);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                        text-decoration: none;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                        align-items: center;
                    }
                    .nav-link {
                        position: relative;
                        color: #FFFFFF;
                        text-decoration: none;
                        font-weight: 500;
                        padding: 0.5rem 0;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        bottom: 0;
                        left: 0;
                        width: 0;
                        height: 2px;
                        background: #00B894;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .nav-link:hover {
                        color: #00B894;
                    }
                    .nav-link:hover::after {
                        width: 100%;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: #FFFFFF;
                    }
                    @keyframes navDrop {
                        from { transform: translateY(-100px); }
                        to { transform: translateY(0); }
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-links {
                            display: none;
                        }
                        .nav-links.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: #0A0A0A;
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo">{"KnoxByte™"}</a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for SECTIONS.iter().map(|(id, label)| html! {
                        <a href={format!("#{}", id)} class="nav-link" onclick={close_menu.clone()}>
                            {*label}
                        </a>
                    }) }
                </div>
            </div>
        </nav>
    }
}

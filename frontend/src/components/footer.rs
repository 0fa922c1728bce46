use chrono::{Datelike, Utc};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Utc::now().year();
    let mailto = format!("mailto:{}", config::studio_email());
    let contact_mailto = format!("mailto:{}", config::studio_contact_email());

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #121212;
                        color: #FFFFFF;
                        padding: 6rem 0 2rem;
                    }
                    .footer-container {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: 2fr 1fr 1fr 1fr;
                        gap: 4rem;
                        margin-bottom: 4rem;
                    }
                    .footer-column {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .footer-column h3 {
                        font-size: 1.5rem;
                        margin: 0;
                        background: linear-gradient(135deg, #00B894 0%, #00A3B8 100%);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .footer-column h4 {
                        font-size: 1.2rem;
                        margin: 0;
                    }
                    .footer-column p {
                        color: #A0A0A0;
                        line-height: 1.6;
                        margin: 0;
                    }
                    .footer-column ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                        display: flex;
                        flex-direction: column;
                        gap: 0.8rem;
                    }
                    .footer-column li a {
                        color: #A0A0A0;
                        text-decoration: none;
                        transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .footer-column li a:hover {
                        color: #00B894;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                    }
                    .social-links a {
                        color: #FFFFFF;
                        text-decoration: none;
                        font-size: 0.95rem;
                    }
                    .social-links a:hover {
                        color: #00B894;
                    }
                    .copyright {
                        text-align: center;
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        color: #A0A0A0;
                    }
                    @media (max-width: 968px) {
                        .footer-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 576px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="footer-container">
                <div class="footer-grid">
                    <div class="footer-column">
                        <h3>{"KnoxByte™"}</h3>
                        <p>
                            {"Transforming ideas into exceptional digital experiences through innovative development and cutting-edge design solutions."}
                        </p>
                        <div class="social-links">
                            <a href={mailto} target="_blank" rel="noopener noreferrer">{"Email"}</a>
                            <a href="https://www.linkedin.com/in/knox-byte-a0a379344/" target="_blank" rel="noopener noreferrer">{"LinkedIn"}</a>
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4>{"Services"}</h4>
                        <ul>
                            <li><a href="#services">{"Web Development"}</a></li>
                            <li><a href="#services">{"Mobile Apps"}</a></li>
                            <li><a href="#services">{"UI/UX Design"}</a></li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Company"}</h4>
                        <ul>
                            <li><a href="#about">{"About Us"}</a></li>
                            <li><a href="#portfolio">{"Portfolio"}</a></li>
                            <li><a href="#contact">{"Contact"}</a></li>
                            <li><Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>></li>
                            <li><Link<Route> to={Route::Cookies}>{"Cookie Policy"}</Link<Route>></li>
                        </ul>
                    </div>

                    <div class="footer-column">
                        <h4>{"Contact"}</h4>
                        <ul>
                            <li><a href={contact_mailto}>{config::studio_contact_email()}</a></li>
                        </ul>
                    </div>
                </div>

                <p class="copyright">{format!("© {} KnoxByte™. All rights reserved", year)}</p>
            </div>
        </footer>
    }
}

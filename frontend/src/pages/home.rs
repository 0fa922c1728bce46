use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::nav::Nav;
use crate::contact::Contact;
use crate::pages::sections::{About, Features, Hero, Portfolio, Services};

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="home">
            <style>
                {r#"
                    html {
                        scroll-behavior: smooth;
                    }
                    .home {
                        overflow-x: hidden;
                    }
                    .page-section {
                        scroll-margin-top: 80px;
                    }
                    .services, .features, .portfolio {
                        padding: 8rem 0;
                        position: relative;
                        overflow: hidden;
                    }
                    .services {
                        background: #0A0A0A;
                    }
                    .features {
                        background: #121212;
                    }
                    .section-container {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        position: relative;
                        z-index: 2;
                    }
                    .section-header {
                        text-align: center;
                        margin-bottom: 6rem;
                        animation: fadeUp 0.8s ease-out both;
                    }
                    .section-header h2 {
                        font-size: clamp(2rem, 3vw, 3rem);
                        color: #FFFFFF;
                        margin-bottom: 1.5rem;
                    }
                    .section-header p {
                        font-size: 1.1rem;
                        color: #A0A0A0;
                        max-width: 600px;
                        margin: 0 auto;
                        line-height: 1.6;
                    }
                    .card-grid {
                        display: grid;
                        gap: 2rem;
                    }
                    .card-grid.three {
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    }
                    .card {
                        background: #1E1E1E;
                        padding: 2.5rem;
                        border-radius: 20px;
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.4);
                        transition: transform 0.3s ease;
                        animation: fadeUp 0.6s ease-out both;
                    }
                    .card:hover {
                        transform: scale(1.02);
                    }
                    .card-icon {
                        width: 60px;
                        height: 60px;
                        border-radius: 15px;
                        background: linear-gradient(135deg, #00B894 0%, #00A3B8 100%);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: white;
                        font-size: 1.4rem;
                        margin-bottom: 1.5rem;
                    }
                    .card h3 {
                        color: #FFFFFF;
                        font-size: 1.4rem;
                        margin-bottom: 1rem;
                    }
                    .card p {
                        color: #A0A0A0;
                        line-height: 1.6;
                    }
                    .reveal {
                        animation: fadeUp 0.8s ease-out both;
                    }
                    .floating-gradient, .floating-shape {
                        position: absolute;
                        border-radius: 50%;
                        background: linear-gradient(135deg, #00B894 0%, #00A3B8 100%);
                        pointer-events: none;
                        animation: drift 20s linear infinite;
                    }
                    .floating-gradient {
                        width: 400px;
                        height: 400px;
                        filter: blur(100px);
                        opacity: 0.1;
                    }
                    .floating-shape {
                        filter: blur(60px);
                        opacity: 0.15;
                    }
                    .floating-gradient.reverse, .floating-shape.reverse {
                        animation-direction: reverse;
                        animation-duration: 25s;
                    }
                    @keyframes fadeUp {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    @keyframes drift {
                        0% { transform: scale(1) rotate(0deg); }
                        50% { transform: scale(1.2) rotate(180deg); }
                        100% { transform: scale(1) rotate(360deg); }
                    }
                "#}
            </style>
            <Nav />
            <div id="home" class="page-section"><Hero /></div>
            <div id="about" class="page-section"><About /></div>
            <div id="services" class="page-section"><Services /></div>
            <div id="features" class="page-section"><Features /></div>
            <div id="portfolio" class="page-section"><Portfolio /></div>
            <div id="contact" class="page-section"><Contact /></div>
            <Footer />
        </div>
    }
}

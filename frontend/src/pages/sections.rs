use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::motion::HeroMotion;

#[function_component(Hero)]
pub fn hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let motion = HeroMotion::at(scroll_y);

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        position: relative;
                        overflow: hidden;
                        background: #0A0A0A;
                        padding-top: 80px;
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                        background: radial-gradient(circle at 50% 50%, #00B89420 0%, transparent 70%);
                        animation: pulse 8s ease-in-out infinite;
                    }
                    .hero-grid {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                        position: relative;
                        z-index: 2;
                    }
                    .hero h1 {
                        font-size: clamp(2.5rem, 5vw, 4.5rem);
                        line-height: 1.1;
                        color: #FFFFFF;
                        margin-bottom: 1.5rem;
                        animation: fadeUp 0.8s ease-out both;
                    }
                    .hero-subtitle {
                        font-size: 1.2rem;
                        color: #A0A0A0;
                        line-height: 1.6;
                        margin-bottom: 2.5rem;
                        animation: fadeUp 0.8s ease-out 0.2s both;
                    }
                    .hero-cta {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        background: linear-gradient(135deg, #00B894 0%, #00A3B8 100%);
                        border-radius: 50px;
                        color: white;
                        text-decoration: none;
                        font-weight: 600;
                        transition: transform 0.2s ease;
                        animation: fadeUp 0.8s ease-out 0.4s both;
                    }
                    .hero-cta:hover {
                        transform: scale(1.05);
                    }
                    .hero-image {
                        border-radius: 20px;
                        overflow: hidden;
                        box-shadow: 0 8px 30px rgba(0, 0, 0, 0.5);
                        will-change: transform, opacity;
                    }
                    .hero-image img {
                        width: 100%;
                        display: block;
                        object-fit: cover;
                    }
                    @keyframes pulse {
                        0%, 100% { transform: scale(1); }
                        50% { transform: scale(1.1); }
                    }
                    @media (max-width: 968px) {
                        .hero-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="hero-background"></div>
            <div class="floating-shape" style="width: 300px; height: 300px; top: 20%; left: 10%;"></div>
            <div class="floating-shape reverse" style="width: 200px; height: 200px; top: 60%; left: 80%;"></div>
            <div class="hero-grid">
                <div>
                    <h1>{"Crafting Digital"}<br />{"Excellence"}</h1>
                    <p class="hero-subtitle">
                        {"We transform ideas into exceptional digital experiences through innovative development and cutting-edge design solutions."}
                    </p>
                    <a href="#contact" class="hero-cta">{"Start Your Project"}</a>
                </div>
                <div class="hero-image" style={motion.style()}>
                    <img
                        src="https://images.unsplash.com/photo-1498050108023-c5249f4df085?auto=format&fit=crop&w=1200&q=80"
                        alt="Digital Workspace"
                    />
                </div>
            </div>
        </section>
    }
}

const STATS: [(&str, &str); 4] = [
    ("100+", "Projects Completed"),
    ("50+", "Happy Clients"),
    ("5+", "Years Experience"),
    ("24/7", "Support"),
];

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section class="about">
            <style>
                {r#"
                    .about {
                        background: #121212;
                        padding: 8rem 0;
                        position: relative;
                        overflow: hidden;
                    }
                    .about-grid {
                        max-width: 1400px;
                        margin: 0 auto;
                        padding: 0 2rem;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 4rem;
                        align-items: center;
                    }
                    .about h2 {
                        font-size: clamp(2rem, 3vw, 3rem);
                        color: #FFFFFF;
                        margin-bottom: 1.5rem;
                    }
                    .about-description {
                        color: #A0A0A0;
                        font-size: 1.1rem;
                        line-height: 1.8;
                        margin-bottom: 3rem;
                    }
                    .stats-grid {
                        display: grid;
                        grid-template-columns: repeat(2, 1fr);
                        gap: 1.5rem;
                    }
                    .stat-card {
                        background: #1E1E1E;
                        padding: 1.5rem;
                        border-radius: 15px;
                        text-align: center;
                        transition: transform 0.3s ease;
                    }
                    .stat-card:hover {
                        transform: translateY(-5px);
                    }
                    .stat-number {
                        font-size: 2rem;
                        font-weight: 700;
                        color: #00B894;
                    }
                    .stat-label {
                        color: #A0A0A0;
                        font-size: 0.9rem;
                    }
                    .about-image {
                        aspect-ratio: 4/5;
                        border-radius: 20px;
                        overflow: hidden;
                    }
                    .about-image img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    @media (max-width: 968px) {
                        .about-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="about-grid">
                <div class="reveal">
                    <h2>{"Innovating Digital Solutions"}</h2>
                    <p class="about-description">
                        {"At KnoxByte Studios, we blend creativity with technical expertise to deliver exceptional digital solutions. Our passion for innovation drives us to create web experiences that not only look stunning but also perform flawlessly."}
                    </p>
                    <div class="stats-grid">
                        { for STATS.iter().map(|(number, label)| html! {
                            <div class="stat-card">
                                <div class="stat-number">{*number}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
                <div class="about-image reveal">
                    <img
                        src="https://images.unsplash.com/photo-1461749280684-dccba630e2f6?auto=format&fit=crop&w=1200&q=80"
                        alt="Our Workspace"
                    />
                </div>
            </div>
        </section>
    }
}

struct Card {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Card; 3] = [
    Card {
        icon: "</>",
        title: "Web Development",
        description: "Custom web applications and responsive websites built with modern technologies and best practices.",
    },
    Card {
        icon: "📱",
        title: "Android Development",
        description: "Native Android applications with seamless user experience. iOS development coming soon.",
    },
    Card {
        icon: "🎨",
        title: "UI/UX Design",
        description: "Intuitive and engaging user interfaces with focus on user experience and modern design principles.",
    },
];

const FEATURES: [Card; 6] = [
    Card {
        icon: "⚡",
        title: "Fast Performance",
        description: "Optimized code and efficient architecture ensuring lightning-fast load times.",
    },
    Card {
        icon: "💰",
        title: "Affordable Solutions",
        description: "High-quality development at competitive rates, making excellence accessible.",
    },
    Card {
        icon: "🧹",
        title: "Clean Code",
        description: "Well-structured, documented code ensuring long-term maintainability.",
    },
    Card {
        icon: "📐",
        title: "Responsive Design",
        description: "Perfectly adapted layouts for all devices and screen sizes.",
    },
    Card {
        icon: "🔒",
        title: "Secure",
        description: "Implementation of best security practices to protect your data.",
    },
    Card {
        icon: "🔍",
        title: "SEO Optimized",
        description: "Built to improve your visibility and ranking in search engines.",
    },
];

fn card_grid(cards: &[Card], class: &'static str) -> Html {
    html! {
        <div class={classes!("card-grid", class)}>
            { for cards.iter().enumerate().map(|(i, card)| html! {
                <div class="card" style={format!("animation-delay: {:.1}s;", i as f64 * 0.1)}>
                    <div class="card-icon">{card.icon}</div>
                    <h3>{card.title}</h3>
                    <p>{card.description}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section class="services">
            <div class="floating-gradient" style="top: 10%; left: 5%;"></div>
            <div class="floating-gradient reverse" style="bottom: 10%; right: 5%;"></div>
            <div class="section-container">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"We offer comprehensive digital solutions tailored to your unique needs, helping you stay ahead in today's competitive landscape."}</p>
                </div>
                { card_grid(&SERVICES, "three") }
            </div>
        </section>
    }
}

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="features">
            <div class="section-container">
                <div class="section-header">
                    <h2>{"Why Choose Us"}</h2>
                    <p>{"We deliver premium solutions at competitive prices, ensuring your investment drives real business value"}</p>
                </div>
                { card_grid(&FEATURES, "three") }
            </div>
        </section>
    }
}

#[derive(Clone, PartialEq)]
pub struct Project {
    pub title: &'static str,
    pub kind: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub code_link: Option<&'static str>,
    pub live_link: Option<&'static str>,
}

pub static PROJECTS: [Project; 2] = [
    Project {
        title: "E-Commerce Platform",
        kind: "Web Application",
        image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?auto=format&fit=crop&w=800&q=80",
        description: "A modern e-commerce platform built with React and Node.js, featuring real-time inventory management and secure payment processing.",
        tags: &["React", "Node.js", "MongoDB", "Stripe"],
        code_link: Some("https://github.com/KnoxByteStudios/project1"),
        live_link: Some("https://project1-demo.com"),
    },
    Project {
        title: "Mobile Banking App",
        kind: "Mobile Application",
        image: "https://images.unsplash.com/photo-1661956602116-aa6865609028?auto=format&fit=crop&w=800&q=80",
        description: "Secure and intuitive mobile banking application with biometric authentication and real-time transaction tracking.",
        tags: &["React Native", "TypeScript", "Firebase"],
        code_link: None,
        live_link: None,
    },
];

fn tags(project: &Project) -> Html {
    html! {
        <div class="tags">
            { for project.tags.iter().map(|tag| html! { <span class="tag">{*tag}</span> }) }
        </div>
    }
}

fn external_link(href: Option<&'static str>, label: &'static str) -> Html {
    match href {
        Some(href) => html! {
            <a
                class="project-link"
                {href}
                target="_blank"
                rel="noopener noreferrer"
                onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
            >
                {label}
            </a>
        },
        None => html! {},
    }
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let selected = use_state(|| None::<usize>);

    let close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };

    let modal = match (*selected).and_then(|i| PROJECTS.get(i)) {
        Some(project) => html! {
            <div class="modal-overlay" onclick={close.clone()}>
                <div class="modal-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                    <button class="modal-close" onclick={close}>{"×"}</button>
                    <h3>{project.title}</h3>
                    <span class="project-type">{project.kind}</span>
                    <img src={project.image} alt={project.title} />
                    <p>{project.description}</p>
                    { tags(project) }
                </div>
            </div>
        },
        None => html! {},
    };

    html! {
        <section class="portfolio">
            <style>
                {r#"
                    .portfolio {
                        background: #121212;
                    }
                    .project-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(350px, 1fr));
                        gap: 2rem;
                    }
                    .project-card {
                        background: #1E1E1E;
                        border-radius: 20px;
                        overflow: hidden;
                        cursor: pointer;
                        transition: transform 0.3s ease;
                    }
                    .project-card:hover {
                        transform: translateY(-10px);
                    }
                    .project-card img {
                        width: 100%;
                        height: 220px;
                        object-fit: cover;
                    }
                    .project-info {
                        padding: 1.5rem;
                    }
                    .project-info h3, .modal-content h3 {
                        color: #FFFFFF;
                        margin: 0 0 0.5rem;
                    }
                    .project-type {
                        color: #00B894;
                        font-size: 0.9rem;
                    }
                    .tags {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 0.5rem;
                        margin-top: 1rem;
                    }
                    .tag {
                        background: rgba(0, 184, 148, 0.1);
                        color: #00B894;
                        padding: 0.3rem 0.8rem;
                        border-radius: 20px;
                        font-size: 0.8rem;
                    }
                    .project-links {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1rem;
                    }
                    .project-link {
                        color: #FFFFFF;
                        border: 1px solid #00B894;
                        padding: 0.4rem 1rem;
                        border-radius: 8px;
                        text-decoration: none;
                        font-size: 0.9rem;
                    }
                    .modal-overlay {
                        position: fixed;
                        inset: 0;
                        background: rgba(0, 0, 0, 0.8);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        z-index: 1100;
                        padding: 2rem;
                    }
                    .modal-content {
                        background: #1E1E1E;
                        border-radius: 20px;
                        padding: 2rem;
                        max-width: 700px;
                        width: 100%;
                        max-height: 90vh;
                        overflow-y: auto;
                        position: relative;
                    }
                    .modal-content img {
                        width: 100%;
                        border-radius: 12px;
                        margin-top: 1rem;
                    }
                    .modal-content p {
                        margin: 1.5rem 0;
                        line-height: 1.6;
                        color: #A0A0A0;
                    }
                    .modal-close {
                        position: absolute;
                        top: 1rem;
                        right: 1rem;
                        background: none;
                        border: none;
                        color: #FFFFFF;
                        font-size: 1.5rem;
                        cursor: pointer;
                    }
                "#}
            </style>
            <div class="section-container">
                <div class="section-header">
                    <h2>{"Our Work"}</h2>
                    <p>{"Explore our latest projects and see how we help businesses succeed in the digital world."}</p>
                </div>
                <div class="project-grid">
                    { for PROJECTS.iter().enumerate().map(|(i, project)| {
                        let onclick = {
                            let selected = selected.clone();
                            Callback::from(move |_: MouseEvent| selected.set(Some(i)))
                        };
                        html! {
                            <div class="project-card" {onclick}>
                                <img src={project.image} alt={project.title} />
                                <div class="project-info">
                                    <h3>{project.title}</h3>
                                    <span class="project-type">{project.kind}</span>
                                    { tags(project) }
                                    <div class="project-links">
                                        { external_link(project.code_link, "View Code") }
                                        { external_link(project.live_link, "Live Demo") }
                                    </div>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
            { modal }
        </section>
    }
}

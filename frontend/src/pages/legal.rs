use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

pub enum Block {
    Text(&'static str),
    Bullets(&'static str, &'static [&'static str]),
}

pub struct LegalSection {
    pub heading: &'static str,
    pub body: Block,
}

pub struct LegalDocument {
    pub title: &'static str,
    pub sections: &'static [LegalSection],
}

pub static TERMS: LegalDocument = LegalDocument {
    title: "Terms of Service",
    sections: &[
        LegalSection {
            heading: "1. Acceptance of Terms",
            body: Block::Text("By accessing and using KnoxByte™'s services, you accept and agree to be bound by the terms and conditions of this agreement."),
        },
        LegalSection {
            heading: "2. Services",
            body: Block::Text("KnoxByte provides web development, mobile application development, and design services. The specific details and deliverables will be outlined in individual project agreements."),
        },
        LegalSection {
            heading: "3. Intellectual Property",
            body: Block::Text("Upon full payment, clients receive full rights to the final deliverables. KnoxByte retains rights to display the work in portfolios and marketing materials."),
        },
    ],
};

pub static PRIVACY: LegalDocument = LegalDocument {
    title: "Privacy Policy",
    sections: &[
        LegalSection {
            heading: "Information Collection",
            body: Block::Text("We collect information you provide directly to us when using our contact forms or requesting our services. This may include your name, email, and project details."),
        },
        LegalSection {
            heading: "Use of Information",
            body: Block::Text("We use the information we collect to provide and improve our services, communicate with you about your projects, and send relevant updates."),
        },
        LegalSection {
            heading: "Data Protection",
            body: Block::Text("We implement appropriate security measures to protect your personal information and ensure it's not accessed, disclosed, altered or destroyed."),
        },
    ],
};

pub static COOKIES: LegalDocument = LegalDocument {
    title: "Cookie Policy",
    sections: &[
        LegalSection {
            heading: "What Are Cookies",
            body: Block::Text("Cookies are small text files that are stored on your device when you visit our website. They help us provide you with a better experience by remembering your preferences and analyzing how you use our site."),
        },
        LegalSection {
            heading: "How We Use Cookies",
            body: Block::Bullets("We use cookies to:", &[
                "Remember your preferences and settings",
                "Understand how you interact with our website",
                "Improve our services based on your behavior",
                "Ensure our website functions properly",
            ]),
        },
        LegalSection {
            heading: "Types of Cookies We Use",
            body: Block::Bullets("", &[
                "Essential cookies: Required for basic website functionality",
                "Analytics cookies: Help us understand how visitors use our site",
                "Preference cookies: Remember your settings and improve your experience",
            ]),
        },
    ],
};

fn render_block(block: &Block) -> Html {
    match block {
        Block::Text(text) => html! { <p>{*text}</p> },
        Block::Bullets(intro, items) => html! {
            <>
                if !intro.is_empty() {
                    <p>{*intro}</p>
                }
                <ul>
                    { for items.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub document: &'static LegalDocument,
}

impl PartialEq for LegalDocument {
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title
    }
}

#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let document = props.document;

    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        document.title,
    );

    html! {
        <div class="legal-content">
            <style>
                {r#"
                    .legal-content {
                        min-height: 100vh;
                        background: #0A0A0A;
                        padding: 120px 2rem 4rem;
                        color: #FFFFFF;
                    }
                    .legal-content > div {
                        max-width: 800px;
                        margin: 0 auto;
                    }
                    .legal-content h1 {
                        font-size: 2.5rem;
                        margin-bottom: 2rem;
                    }
                    .legal-content section {
                        margin-bottom: 2rem;
                    }
                    .legal-content h2 {
                        font-size: 1.8rem;
                        margin-bottom: 1rem;
                    }
                    .legal-content p, .legal-content li {
                        color: #A0A0A0;
                        line-height: 1.6;
                        margin-bottom: 1rem;
                    }
                    .legal-content ul {
                        list-style-type: none;
                        padding-left: 1.5rem;
                    }
                    .legal-content li {
                        position: relative;
                        margin-bottom: 0.5rem;
                    }
                    .legal-content li:before {
                        content: "•";
                        color: #00B894;
                        position: absolute;
                        left: -1.5rem;
                    }
                    .back-link {
                        display: inline-block;
                        margin-top: 2rem;
                        color: #00B894;
                        text-decoration: none;
                    }
                    .back-link:hover {
                        text-decoration: underline;
                    }
                "#}
            </style>
            <div>
                <h1>{document.title}</h1>
                { for document.sections.iter().map(|section| html! {
                    <section>
                        <h2>{section.heading}</h2>
                        { render_block(&section.body) }
                    </section>
                }) }
                <Link<Route> to={Route::Home} classes="back-link">{"← Back to Home"}</Link<Route>>
            </div>
        </div>
    }
}

#[function_component(Terms)]
pub fn terms() -> Html {
    html! { <LegalPage document={&TERMS} /> }
}

#[function_component(Privacy)]
pub fn privacy() -> Html {
    html! { <LegalPage document={&PRIVACY} /> }
}

#[function_component(Cookies)]
pub fn cookies() -> Html {
    html! { <LegalPage document={&COOKIES} /> }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="legal-content" style="min-height: 100vh; padding: 120px 2rem; text-align: center;">
            <h1>{"Page not found"}</h1>
            <Link<Route> to={Route::Home} classes="back-link">{"← Back to Home"}</Link<Route>>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_document_has_content() {
        for document in [&TERMS, &PRIVACY, &COOKIES] {
            assert!(!document.title.is_empty());
            assert_eq!(document.sections.len(), 3, "{}", document.title);
            for section in document.sections {
                let has_body = match &section.body {
                    Block::Text(text) => !text.is_empty(),
                    Block::Bullets(_, items) => !items.is_empty(),
                };
                assert!(has_body, "{} / {}", document.title, section.heading);
            }
        }
    }

    #[test]
    fn privacy_mentions_the_contact_form() {
        let Block::Text(text) = &PRIVACY.sections[0].body else {
            panic!("expected text");
        };
        assert!(text.contains("contact forms"));
    }
}

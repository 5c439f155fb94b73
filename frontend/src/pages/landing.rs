use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use log::debug;
use wasm_bindgen::JsCast;
use web_sys::Element;

use crate::Route;
use crate::config;
use crate::components::contact_form::ContactForm;
use crate::components::navbar::Navbar;
use crate::components::reveal::Reveal;
use crate::components::ripple_button::RippleButton;
use crate::components::stat_counter::Stat;
use crate::components::typed_title::TypedTitle;
use crate::hooks::scroll::{scroll_to_section, use_throttled_scroll};
use crate::interactions::motion::{floating_transform, hero_transform};
use crate::interactions::nav::SectionBounds;
use crate::interactions::page::{LandingAction, LandingState};

struct Company {
    name: &'static str,
    tagline: &'static str,
    description: &'static str,
    route: Option<Route>,
    site: &'static str,
}

static COMPANIES: [Company; 3] = [
    Company {
        name: "BlueWave Studio",
        tagline: "Main Company",
        description: "A hub for innovation and creativity, powering multiple brands and ventures with futuristic design and technology.",
        route: Some(Route::Studio),
        site: "https://bluewave.studio",
    },
    Company {
        name: "LiteNode",
        tagline: "Infrastructure",
        description: "Lightweight hosting and edge nodes for teams that want to ship without running servers.",
        route: None,
        site: "https://litenode.net",
    },
    Company {
        name: "Tidewell Labs",
        tagline: "Research",
        description: "Prototyping the tools our other brands will need next year.",
        route: None,
        site: "https://tidewell.dev",
    },
];

const SERVICES: [(&str, &str, &str); 4] = [
    ("fas fa-code", "Web Development", "Fast, accessible sites and web apps built to last."),
    ("fas fa-mobile-alt", "Mobile Apps", "Native-feeling apps for iOS and Android."),
    ("fas fa-server", "Cloud Hosting", "Managed infrastructure that scales with you."),
    ("fas fa-paint-brush", "Brand Design", "Identities, interfaces and everything in between."),
];

const STATS: [(&str, &str); 4] = [
    ("50+", "Projects Delivered"),
    ("1200+", "Happy Clients"),
    ("5B+", "Requests Served"),
    ("24", "Team Members"),
];

const FLOATING_ELEMENTS: usize = 3;

#[function_component(Landing)]
pub fn landing() -> Html {
    let state = use_reducer(LandingState::default);
    use_title("LiteNode | Powered by BlueWave Studio".to_string());
    use_unmount(|| debug!("Landing page unmounted"));

    {
        let dispatcher = state.dispatcher();
        use_throttled_scroll(Callback::from(move |(scroll_y, sections): (f64, Vec<SectionBounds>)| {
            dispatcher.dispatch(LandingAction::Scrolled { scroll_y, sections });
        }));
    }

    // Clicking anywhere outside a project card closes the open one
    {
        let dispatcher = state.dispatcher();
        use_event_with_window("click", move |e: MouseEvent| {
            let inside_card = e
                .target()
                .and_then(|target| target.dyn_into::<Element>().ok())
                .and_then(|element| element.closest(".project-card").ok().flatten())
                .is_some();
            if !inside_card {
                dispatcher.dispatch(LandingAction::ClearCard);
            }
        });
    }

    let on_navigate = {
        let dispatcher = state.dispatcher();
        Callback::from(move |id: &'static str| {
            scroll_to_section(id);
            dispatcher.dispatch(LandingAction::CloseMenu);
        })
    };

    let on_toggle_menu = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(LandingAction::ToggleMenu))
    };

    let scroll_button = |id: &'static str| Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll_to_section(id);
    });

    let company_cards = COMPANIES.iter().enumerate().map(|(index, company)| {
        let onclick = {
            let dispatcher = state.dispatcher();
            Callback::from(move |e: MouseEvent| {
                let on_social_link = e
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|element| element.closest(".social-links").ok().flatten())
                    .is_some();
                if !on_social_link {
                    dispatcher.dispatch(LandingAction::ToggleCard(index));
                }
            })
        };
        html! {
            <Reveal class="company-card" key={company.name}>
                <div class={classes!("project-card", state.is_card_active(index).then_some("active"))} onclick={onclick}>
                    <h3>{ company.name }</h3>
                    <span class="company-tag">{ company.tagline }</span>
                    <p class="project-details">{ company.description }</p>
                    <div class="social-links">
                        <a href={company.site} target="_blank" rel="noopener noreferrer">
                            <i class="fas fa-globe"></i>
                        </a>
                        {
                            if let Some(route) = company.route.clone() {
                                html! {
                                    <Link<Route> to={route} classes="studio-link">
                                        {"Visit"}
                                    </Link<Route>>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                </div>
            </Reveal>
        }
    });

    html! {
        <div class="landing-page">
            <Navbar
                active_section={state.active_section.clone()}
                menu_open={state.menu_open}
                on_toggle_menu={on_toggle_menu}
                on_navigate={on_navigate}
            />

            <section id="home" class="hero-section">
                <div class="hero" style={format!("transform: {};", hero_transform(state.scroll_y))}>
                    <TypedTitle text="Building the future, one node at a time" />
                    <p class="hero-subtitle">
                        {"LiteNode is part of the BlueWave Studio family of companies."}
                    </p>
                    <div class="hero-buttons">
                        <RippleButton class="btn-primary" onclick={scroll_button("companies")}>
                            {"Explore Companies"}
                        </RippleButton>
                        <RippleButton class="btn-secondary" onclick={scroll_button("about")}>
                            {"Learn More"}
                        </RippleButton>
                    </div>
                </div>
                { for (0..FLOATING_ELEMENTS).map(|i| html! {
                    <div
                        class={format!("floating-element floating-{}", i + 1)}
                        style={format!("transform: {};", floating_transform(i, state.scroll_y))}
                    ></div>
                }) }
            </section>

            <section id="companies" class="companies">
                <h2 class="section-title">{"Our Companies"}</h2>
                <div class="companies-grid">
                    { for company_cards }
                </div>
            </section>

            <section id="services" class="services">
                <h2 class="section-title">{"What We Do"}</h2>
                <div class="services-grid">
                    { for SERVICES.iter().map(|&(icon, title, text)| html! {
                        <Reveal class="service-item" key={title}>
                            <i class={icon}></i>
                            <h3>{ title }</h3>
                            <p>{ text }</p>
                        </Reveal>
                    }) }
                </div>
            </section>

            <section id="about" class="about">
                <Reveal class="about-content">
                    <h2 class="section-title">{"About Us"}</h2>
                    <p>
                        {"We are a small group of engineers and designers who build and run our own products. \
                          Every company in the group shares the same tooling, the same standards and the same people."}
                    </p>
                </Reveal>
                <div class="stats">
                    { for STATS.iter().map(|&(value, caption)| html! {
                        <Stat key={caption} value={value} caption={caption} />
                    }) }
                </div>
            </section>

            <section id="contact" class="contact">
                <h2 class="section-title">{"Get In Touch"}</h2>
                <div class="contact-grid">
                    <Reveal class="contact-info">
                        <h3>{"Let's talk"}</h3>
                        <p>{"Tell us about your project and we'll get back to you within two business days."}</p>
                        <p><i class="fas fa-envelope"></i>{ format!(" {}", config::contact_address()) }</p>
                    </Reveal>
                    <Reveal class="contact-form">
                        <ContactForm />
                    </Reveal>
                </div>
            </section>

            <footer class="footer">
                <p>
                    {"© LiteNode. A "}
                    <Link<Route> to={Route::Studio}>{"BlueWave Studio"}</Link<Route>>
                    {" company."}
                </p>
            </footer>

            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        font-family: Inter, ui-sans-serif, system-ui, -apple-system, 'Segoe UI', Roboto, Arial, sans-serif;
                        background: #020617;
                        color: #eaf6ff;
                    }
                    .navbar {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 1000;
                        background: rgba(8, 37, 103, 0.85);
                        backdrop-filter: blur(12px);
                    }
                    .nav-container {
                        max-width: 1200px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 24px;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: 700;
                        color: #60a5fa;
                        text-decoration: none;
                    }
                    .nav-menu {
                        display: flex;
                        gap: 32px;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }
                    .nav-menu a {
                        color: rgba(230, 245, 255, 0.8);
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-menu a.active,
                    .nav-menu a:hover {
                        color: #7dd3fc;
                    }
                    .hamburger {
                        display: none;
                        flex-direction: column;
                        gap: 5px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .hamburger span {
                        width: 25px;
                        height: 3px;
                        background: white;
                        transition: all 0.3s;
                    }
                    section {
                        padding: 120px 24px 80px;
                        max-width: 1200px;
                        margin: 0 auto;
                    }
                    .section-title {
                        text-align: center;
                        font-size: 2.5rem;
                        margin-bottom: 48px;
                    }
                    .hero-section {
                        min-height: 100vh;
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                    }
                    .hero {
                        text-align: center;
                        position: relative;
                        z-index: 2;
                    }
                    .hero-title {
                        font-size: 3.5rem;
                        min-height: 4.2rem;
                        background: linear-gradient(90deg, #60a5fa, #a78bfa, #7dd3fc);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .hero-title.typing::after {
                        content: '|';
                        color: #7dd3fc;
                        margin-left: 2px;
                    }
                    .hero-buttons {
                        display: flex;
                        gap: 16px;
                        justify-content: center;
                    }
                    .floating-element {
                        position: absolute;
                        border-radius: 40%;
                        filter: blur(60px);
                        opacity: 0.3;
                        background: linear-gradient(135deg, #60a5fa, #a78bfa);
                    }
                    .floating-1 { width: 300px; height: 300px; top: 10%; left: 5%; }
                    .floating-2 { width: 200px; height: 200px; top: 60%; right: 10%; }
                    .floating-3 { width: 150px; height: 150px; bottom: 5%; left: 40%; }
                    .btn {
                        padding: 14px 28px;
                        border-radius: 8px;
                        border: none;
                        font-size: 1rem;
                        cursor: pointer;
                    }
                    .btn:disabled { opacity: 0.7; cursor: default; }
                    .btn-primary { background: #3B82F6; color: white; }
                    .btn-secondary { background: transparent; color: white; border: 1px solid rgba(255, 255, 255, 0.4); }
                    .ripple {
                        position: absolute;
                        background: rgba(255, 255, 255, 0.3);
                        border-radius: 50%;
                        transform: scale(0);
                        animation: ripple 0.6s linear;
                        pointer-events: none;
                    }
                    @keyframes ripple {
                        to {
                            transform: scale(4);
                            opacity: 0;
                        }
                    }
                    .companies-grid,
                    .services-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                        gap: 24px;
                    }
                    .project-card {
                        padding: 32px;
                        border-radius: 16px;
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(96, 165, 250, 0.15);
                        cursor: pointer;
                        transition: transform 0.3s, border-color 0.3s;
                    }
                    .project-card .project-details {
                        max-height: 0;
                        overflow: hidden;
                        transition: max-height 0.4s ease;
                    }
                    .project-card.active {
                        transform: translateY(-4px);
                        border-color: #60a5fa;
                    }
                    .project-card.active .project-details { max-height: 200px; }
                    .company-tag {
                        text-transform: uppercase;
                        letter-spacing: 1.6px;
                        font-size: 12px;
                        color: rgba(220, 235, 255, 0.75);
                    }
                    .social-links {
                        display: flex;
                        gap: 12px;
                        margin-top: 16px;
                    }
                    .social-links a { color: #7dd3fc; }
                    .stats {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(180px, 1fr));
                        gap: 24px;
                        margin-top: 48px;
                        text-align: center;
                    }
                    .stat h4 {
                        font-size: 2.5rem;
                        margin: 0;
                        color: #60a5fa;
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1.5fr;
                        gap: 48px;
                    }
                    .form-group { margin-bottom: 16px; }
                    .form-group input,
                    .form-group textarea {
                        width: 100%;
                        box-sizing: border-box;
                        padding: 12px 16px;
                        border-radius: 8px;
                        border: 1px solid rgba(255, 255, 255, 0.15);
                        background: rgba(255, 255, 255, 0.05);
                        color: inherit;
                        font: inherit;
                    }
                    .footer {
                        text-align: center;
                        padding: 32px;
                        color: rgba(147, 197, 253, 0.6);
                    }
                    .footer a { color: #7dd3fc; }
                    .animate-element {
                        opacity: 0;
                        transform: translateY(30px);
                        transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1);
                    }
                    .animate-element.animate-in {
                        opacity: 1;
                        transform: translateY(0);
                    }
                    @media (max-width: 768px) {
                        .hamburger { display: flex; }
                        .nav-menu { display: none; }
                        .nav-menu.active {
                            display: flex !important;
                            position: fixed;
                            top: 80px;
                            left: 0;
                            width: 100%;
                            height: calc(100vh - 80px);
                            background: rgba(8, 37, 103, 0.98);
                            flex-direction: column;
                            justify-content: center;
                            align-items: center;
                            gap: 40px;
                            backdrop-filter: blur(20px);
                        }
                        .contact-grid { grid-template-columns: 1fr; }
                        .hero-title { font-size: 2.25rem; }
                    }
                "#}
            </style>
        </div>
    }
}

use std::rc::Rc;

use yew::prelude::*;

use crate::config;
use crate::coordinator::registry::RevealRegistry;
use crate::coordinator::trail::{CursorPosition, PointerTrail};
use crate::coordinator::Notify;
use crate::dom::{self, host::GlooTimer, PageCoordinator};
use crate::pages::content::{ATTRACTIONS, EXPERIENCES, NAV_SECTIONS, STATS};
use crate::pages::forms::{ContactForm, RegisterForm};

fn section_class(registry: &RevealRegistry, id: &str, animation: &'static str) -> Classes {
    let state = if registry.is_revealed(id) {
        "section-visible"
    } else {
        "section-hidden"
    };
    classes!("landing-section", animation, state)
}

fn content_class(registry: &RevealRegistry, id: &str) -> Classes {
    classes!("section-content", registry.is_revealed(id).then_some("content-visible"))
}

fn stagger_class(
    registry: &RevealRegistry,
    id: &str,
    order: usize,
    extra: &'static str,
) -> Classes {
    let state = if registry.is_item_revealed(id, order) {
        "stagger-visible"
    } else {
        "stagger-hidden"
    };
    classes!(dom::host::STAGGER_ITEM_CLASS, extra, state)
}

fn render_trail(trail: &PointerTrail) -> Html {
    html! {
        <>
            { for trail.dots().map(|(sample, dot)| html! {
                <div
                    key={sample.id}
                    class="cursor-trail"
                    style={format!(
                        "left: {}px; top: {}px; width: {}px; height: {}px; opacity: {};",
                        sample.x, sample.y, dot.size, dot.size, dot.opacity
                    )}
                />
            }) }
        </>
    }
}

fn render_cursor(cursor: CursorPosition) -> Html {
    let position = format!("left: {}px; top: {}px;", cursor.x, cursor.y);
    html! {
        <>
            <div class="cursor-glow-large" style={position.clone()} />
            <div class="cursor-glow" style={position.clone()} />
            <div class="cursor-dot" style={position} />
        </>
    }
}

fn render_nav(active: Option<&str>) -> Html {
    html! {
        <nav class="landing-nav">
            <div class="nav-brand">{"Visit Malaysia 2026"}</div>
            <div class="nav-links">
                { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                    <a href={format!("#{id}")} class={classes!("nav-link", (active == Some(*id)).then_some("active"))}>
                        {*label}
                    </a>
                }) }
            </div>
        </nav>
    }
}

fn render_footer() -> Html {
    html! {
        <footer class="landing-footer">
            <div class="footer-grid">
                <div>
                    <h3 class="footer-brand">{"Visit Malaysia 2026"}</h3>
                    <p>{"Experience the magic of Malaysia. Where cultures meet, adventures begin, and memories last forever."}</p>
                    <p class="footer-small">{"Tourism Malaysia - Ministry of Tourism, Arts and Culture"}</p>
                </div>
                <div>
                    <h4>{"Quick Links"}</h4>
                    { for NAV_SECTIONS.iter().map(|(id, label)| html! {
                        <a href={format!("#{id}")} class="footer-link">{*label}</a>
                    }) }
                </div>
            </div>
            <p class="footer-small">{"© 2026 Visit Malaysia. All rights reserved."}</p>
        </footer>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let trigger = use_force_update();
    let unwired = use_state(|| false);
    let coordinator = use_memo(
        move |_| {
            let notify: Notify = Rc::new(move || trigger.force_update());
            PageCoordinator::new(config::load(), GlooTimer, notify)
        },
        (),
    );

    // Wire the page once the sections exist in the DOM; dropping the guard undoes it.
    {
        let coordinator = coordinator.clone();
        let unwired = unwired.clone();
        use_effect_with_deps(
            move |_| {
                let guard = match dom::mount(coordinator) {
                    Ok(guard) => Some(guard),
                    Err(e) => {
                        log::error!("Failed to wire landing page: {}", e);
                        unwired.set(true);
                        None
                    }
                };
                move || drop(guard)
            },
            (),
        );
    }

    let landing_css = r#"
        .landing-page {
            background: #000;
            color: #fff;
            overflow-x: hidden;
            cursor: none;
        }
        .cursor-trail, .cursor-dot, .cursor-glow, .cursor-glow-large {
            position: fixed;
            pointer-events: none;
            border-radius: 50%;
            transform: translate(-50%, -50%);
            z-index: 9999;
        }
        .cursor-trail {
            background: radial-gradient(circle, rgba(250, 204, 21, 0.9), rgba(239, 68, 68, 0.4));
            mix-blend-mode: screen;
        }
        .cursor-dot {
            width: 10px;
            height: 10px;
            background: #facc15;
        }
        .cursor-glow {
            width: 40px;
            height: 40px;
            background: rgba(239, 68, 68, 0.35);
            filter: blur(8px);
        }
        .cursor-glow-large {
            width: 120px;
            height: 120px;
            background: rgba(37, 99, 235, 0.15);
            filter: blur(30px);
        }
        .landing-nav {
            position: fixed;
            top: 0;
            left: 0;
            right: 0;
            height: 80px;
            z-index: 50;
            display: flex;
            align-items: center;
            justify-content: space-between;
            padding: 0 1.5rem;
            background: rgba(0, 0, 0, 0.8);
            backdrop-filter: blur(16px);
            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
        }
        .nav-brand, .footer-brand {
            font-size: 1.5rem;
            font-weight: 700;
            background: linear-gradient(90deg, #facc15, #ef4444, #2563eb);
            -webkit-background-clip: text;
            -webkit-text-fill-color: transparent;
        }
        .nav-links {
            display: flex;
            gap: 2rem;
        }
        .nav-link, .footer-link {
            color: #fff;
            text-decoration: none;
            transition: color 0.2s;
        }
        .nav-link:hover, .nav-link.active, .footer-link:hover {
            color: #facc15;
        }
        .landing-section {
            min-height: 100vh;
            position: relative;
            padding: 5rem 1.5rem;
            transition: opacity 1s ease, transform 1s ease;
        }
        .landing-section.section-hidden {
            opacity: 0;
            transform: translateY(40px);
        }
        .landing-section.section-visible {
            opacity: 1;
            transform: none;
            filter: none;
        }
        .section-animate-hero.section-hidden {
            transform: scale(1.05);
        }
        .section-animate-slide-left.section-hidden {
            transform: translateX(-60px);
        }
        .section-animate-flip.section-hidden {
            transform: perspective(1000px) rotateX(12deg);
        }
        .section-animate-rotate.section-hidden {
            transform: rotate(-2deg) translateY(40px);
        }
        .section-animate-scale.section-hidden {
            transform: scale(0.9);
        }
        .section-animate-slide-up-blur.section-hidden {
            transform: translateY(60px);
            filter: blur(8px);
        }
        .section-content {
            max-width: 80rem;
            margin: 0 auto;
            opacity: 0;
            transform: translateY(2.5rem);
            transition: all 1s ease;
        }
        .section-content.content-visible {
            opacity: 1;
            transform: none;
        }
        .stagger-item {
            transition: opacity 0.6s ease, transform 0.6s ease;
        }
        .stagger-item.stagger-hidden {
            opacity: 0;
            transform: translateY(30px) scale(0.95);
        }
        .stagger-item.stagger-visible {
            opacity: 1;
            transform: none;
        }
        .landing-unwired .section-hidden,
        .landing-unwired .section-content,
        .landing-unwired .stagger-hidden {
            opacity: 1;
            transform: none;
        }
        .card-grid {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
            gap: 2rem;
        }
        .stat-card, .attraction-card, .experience-card {
            padding: 2rem;
            border-radius: 1rem;
            border: 1px solid rgba(255, 255, 255, 0.1);
            background: rgba(255, 255, 255, 0.05);
        }
        .attraction-card img {
            width: 100%;
            height: 16rem;
            object-fit: cover;
            border-radius: 0.75rem;
        }
        .landing-form {
            max-width: 40rem;
            margin: 0 auto;
            display: flex;
            flex-direction: column;
            gap: 1.5rem;
        }
        .landing-form input, .landing-form textarea {
            width: 100%;
            padding: 0.75rem 1rem;
            border-radius: 0.5rem;
            border: 1px solid rgba(255, 255, 255, 0.2);
            background: rgba(255, 255, 255, 0.05);
            color: #fff;
        }
        .form-row {
            display: grid;
            grid-template-columns: 1fr 1fr;
            gap: 1rem;
        }
        .form-submit, .hero-cta {
            padding: 1rem 2rem;
            border: none;
            border-radius: 9999px;
            font-weight: 600;
            color: #fff;
            background: linear-gradient(90deg, #eab308, #ef4444, #dc2626);
            text-decoration: none;
        }
        .hero-secondary {
            padding: 1rem 2rem;
            border: 2px solid rgba(255, 255, 255, 0.2);
            border-radius: 9999px;
            color: #fff;
            text-decoration: none;
        }
        .landing-footer {
            padding: 3rem 1.5rem;
            border-top: 1px solid rgba(255, 255, 255, 0.1);
            color: #9ca3af;
        }
        .footer-grid {
            display: grid;
            grid-template-columns: 2fr 1fr;
            gap: 2rem;
        }
        .footer-link {
            display: block;
            color: #9ca3af;
        }
        .footer-small {
            font-size: 0.875rem;
            color: #6b7280;
        }
        @media (max-width: 768px) {
            .nav-links {
                display: none;
            }
            .form-row, .footer-grid {
                grid-template-columns: 1fr;
            }
        }
    "#;

    let registry = coordinator.registry();
    let trail = coordinator.trail();

    html! {
        <div class={classes!("landing-page", (*unwired).then_some("landing-unwired"))}>
            <style>{landing_css}</style>
            { render_trail(&trail) }
            { render_cursor(trail.cursor()) }
            { render_nav(registry.active()) }

            <section id="hero" class={section_class(&registry, "hero", "section-animate-hero")}>
                <div class={content_class(&registry, "hero")}>
                    <span class="hero-badge">{"Official Campaign 2026"}</span>
                    <h1 class="hero-title">{"Visit Malaysia 2026"}</h1>
                    <p class="hero-subtitle">{"Truly Asia, Truly Unforgettable"}</p>
                    <p>{"Discover the perfect harmony of cultures, cuisines, and natural wonders. Experience a nation where tradition meets modernity, and every journey creates memories that last a lifetime."}</p>
                    <div class="hero-cta-group">
                        <a href="#register" class="hero-cta">{"Register for Updates"}</a>
                        <a href="#about" class="hero-secondary">{"Explore More"}</a>
                    </div>
                </div>
            </section>

            <section id="about" class={section_class(&registry, "about", "section-animate-slide-left")}>
                <div class={content_class(&registry, "about")}>
                    <h2>{"About Malaysia"}</h2>
                    <p class="section-lead">{"A Melting Pot of Cultures, Flavors, and Natural Beauty"}</p>
                    <h3>{"The Heart of Southeast Asia"}</h3>
                    <p>{"Malaysia is a stunning Southeast Asian country that seamlessly blends ancient traditions with modern innovation. Located in the heart of Asia, this tropical paradise offers visitors an incredible diversity of experiences across its 13 states and 3 federal territories."}</p>
                    <p>{"From the gleaming skyscrapers of Kuala Lumpur to the ancient rainforests of Borneo, from pristine beaches to mist-covered highlands, Malaysia captivates travelers with its natural beauty and warm hospitality."}</p>
                    <div class="card-grid">
                        { for STATS.iter().enumerate().map(|(order, stat)| html! {
                            <div class={stagger_class(&registry, "about", order, "stat-card")}>
                                <div class="stat-icon">{stat.icon}</div>
                                <div class="stat-number">{stat.number}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="attractions" class={section_class(&registry, "attractions", "section-animate-flip")}>
                <div class={content_class(&registry, "attractions")}>
                    <h2>{"Must-Visit Attractions"}</h2>
                    <p class="section-lead">{"Discover iconic landmarks and hidden gems across Malaysia"}</p>
                    <div class="card-grid">
                        { for ATTRACTIONS.iter().enumerate().map(|(order, attraction)| html! {
                            <div class={stagger_class(&registry, "attractions", order, "attraction-card")}>
                                <img src={attraction.image} alt={attraction.title} loading="lazy" />
                                <h3>{attraction.title}</h3>
                                <p>{attraction.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="experiences" class={section_class(&registry, "experiences", "section-animate-rotate")}>
                <div class={content_class(&registry, "experiences")}>
                    <h2>{"Unforgettable Experiences"}</h2>
                    <p class="section-lead">{"Immerse yourself in the diverse wonders Malaysia has to offer"}</p>
                    <div class="card-grid">
                        { for EXPERIENCES.iter().enumerate().map(|(order, experience)| html! {
                            <div class={stagger_class(&registry, "experiences", order, "experience-card")}>
                                <div class="experience-icon">{experience.icon}</div>
                                <h3>{experience.title}</h3>
                                <p>{experience.description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </section>

            <section id="register" class={section_class(&registry, "register", "section-animate-scale")}>
                <div class={content_class(&registry, "register")}>
                    <h2>{"Register Your Interest"}</h2>
                    <p class="section-lead">{"Register to receive exclusive updates, travel tips, and special offers for Visit Malaysia 2026"}</p>
                    <RegisterForm />
                </div>
            </section>

            <section id="contact" class={section_class(&registry, "contact", "section-animate-slide-up-blur")}>
                <div class={content_class(&registry, "contact")}>
                    <h2>{"Get In Touch"}</h2>
                    <p class="section-lead">{"Have questions about visiting Malaysia? We're here to help!"}</p>
                    <ContactForm />
                </div>
            </section>

            { render_footer() }
        </div>
    }
}

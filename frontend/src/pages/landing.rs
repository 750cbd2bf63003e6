use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::components::offers_carousel::OffersCarousel;
use crate::components::overlay::Overlay;
use crate::components::site_nav::{Logo, SiteNav};
use crate::config::{BUSINESS_NAME, HOME_META, PHONE, WHATSAPP_GREETING};
use crate::contact::{tel_href, whatsapp_href};
use crate::content::{AUDIENCES, GALLERY_SLOTS, HIGHLIGHTS, JOURNEY, SECTIONS, STATS};
use crate::hooks::{use_page_meta, use_reveal_on_scroll, use_scroll_offset_var};
use crate::Route;

#[function_component(Landing)]
pub fn landing() -> Html {
    let menu_open = use_state(|| false);
    let call_open = use_state(|| false);

    use_page_meta(HOME_META);
    use_scroll_offset_var();
    use_reveal_on_scroll();

    let set_menu = |open: bool| {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(open))
    };
    let set_call = |open: bool| {
        let call_open = call_open.clone();
        Callback::from(move |_: ()| call_open.set(open))
    };
    let click = |callback: Callback<()>| Callback::from(move |_: MouseEvent| callback.emit(()));

    html! {
        <div class="page" id="top">
            <Overlay kind="menu" open={*menu_open} on_close={set_menu(false)} header={html! { <Logo /> }}>
                <div class="menu-links">
                    { for SECTIONS.iter().map(|(label, anchor)| html! {
                        <a key={*label} class="menu-link" href={*anchor} onclick={click(set_menu(false))}>
                            {*label}
                        </a>
                    }) }
                </div>
                <Link<Route> to={Route::Booking} classes="cta primary">
                    {"Free Consultation"}
                </Link<Route>>
            </Overlay>

            <Overlay
                kind="call"
                open={*call_open}
                on_close={set_call(false)}
                header={html! { <p class="eyebrow">{"Instant Call"}</p> }}
                labelled_by={AttrValue::from("call-title")}
            >
                <h3 id="call-title">{format!("Talk to {}", BUSINESS_NAME)}</h3>
                <p>
                    {"Our concierge is ready to guide you through treatments, pricing, and appointment times."}
                </p>
                <div class="call-actions">
                    <a class="cta primary" href={tel_href(PHONE)}>{"Call Now"}</a>
                    <a class="cta ghost" href={whatsapp_href(PHONE, WHATSAPP_GREETING)} target="_blank" rel="noopener noreferrer">
                        {"WhatsApp"}
                    </a>
                    <button type="button" class="cta ghost" onclick={click(set_call(false))}>
                        {"Maybe Later"}
                    </button>
                </div>
            </Overlay>

            <header class="hero">
                <div class="hero-bg" aria-hidden="true" />
                <div class="hero-grid" aria-hidden="true" />
                <div class="hero-glow" aria-hidden="true" />

                <SiteNav on_open_menu={set_menu(true)} on_contact={set_call(true)} />

                <div class="hero-content">
                    <div class="hero-text">
                        <p class="eyebrow">{format!("Welcome to {}", BUSINESS_NAME)}</p>
                        <h1>
                            {"Health &"}
                            <span>{"Relaxation"}</span>
                        </h1>
                        <div class="hero-actions">
                            <button class="cta primary" onclick={click(set_call(true))}>
                                {"Contact Us"}
                            </button>
                        </div>
                    </div>
                    <div class="hero-floating-badge">
                        <p class="eyebrow">{"Today’s Ritual"}</p>
                        <h3>{"Golden Calm"}</h3>
                        <p>{"Signature aromatherapy + warm stone release."}</p>
                    </div>
                </div>
            </header>

            <section class="tiles reveal">
                { for AUDIENCES.iter().map(|(class, label)| html! {
                    <article key={*class} class={classes!("tile", *class)}>
                        <div class="tile-overlay" />
                        <p>{"for "}<span>{*label}</span></p>
                    </article>
                }) }
            </section>

            <section class="section highlights reveal" id="services">
                <div class="section-head">
                    <p class="eyebrow">{"Angel Oasis Rituals"}</p>
                    <h2>{"Modern Healing, Timeless Calm"}</h2>
                    <p>
                        {"Crafted experiences blending aromatherapy, hydrotherapy, and restorative touch. Every ritual is guided by golden oils, warm stone therapy, and curated music."}
                    </p>
                </div>
                <div class="highlight-grid">
                    { for HIGHLIGHTS.iter().map(|(title, copy)| html! {
                        <article key={*title} class="highlight-card">
                            <div class="spark" />
                            <h3>{*title}</h3>
                            <p>{*copy}</p>
                            <Link<Route> to={Route::Booking} classes="text-link">{"Explore"}</Link<Route>>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section sanctuary reveal" id="about">
                <div class="sanctuary-grid">
                    <div class="sanctuary-copy">
                        <p class="eyebrow">{"The Sanctuary"}</p>
                        <h2>{"Float in a Golden Oasis"}</h2>
                        <p>
                            {"Step into a luminous retreat with curated scents, warm lighting, and soothing soundscapes. Every ritual is tailored to your rhythm."}
                        </p>
                        <div class="stat-row">
                            { for STATS.iter().map(|(value, label)| html! {
                                <div key={*label}>
                                    <p class="stat">{*value}</p>
                                    <p class="stat-label">{*label}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="sanctuary-card">
                        <div class="orb" />
                        <h3>{"Evening Bliss"}</h3>
                        <p>{"Sunset treatments with warm oils and candlelight therapy."}</p>
                        <Link<Route> to={Route::Booking} classes="cta ghost">{"Reserve a Slot"}</Link<Route>>
                    </div>
                </div>
            </section>

            <OffersCarousel />

            <section class="section journey reveal">
                <div class="section-head">
                    <p class="eyebrow">{"Your Journey"}</p>
                    <h2>{"Flow Through Every Step"}</h2>
                </div>
                <div class="timeline">
                    { for JOURNEY.iter().map(|item| html! {
                        <article key={item.step} class="timeline-card">
                            <span>{item.step}</span>
                            <h3>{item.title}</h3>
                            <p>{item.copy}</p>
                        </article>
                    }) }
                </div>
            </section>

            <section class="section gallery reveal">
                <div class="section-head">
                    <p class="eyebrow">{"Experience"}</p>
                    <h2>{"Golden Moments"}</h2>
                </div>
                <div class="gallery-grid">
                    { for (1..=GALLERY_SLOTS).map(|slot| html! {
                        <div key={slot} class={classes!("gallery-card", format!("g{}", slot))}>
                            <div class="gallery-glow" />
                        </div>
                    }) }
                </div>
            </section>

            <section class="section membership reveal">
                <div class="membership-panel">
                    <div>
                        <p class="eyebrow">{"Membership"}</p>
                        <h2>{"Glow All Year"}</h2>
                        <p>{"Priority access, exclusive rituals, and personalized wellness consultations."}</p>
                    </div>
                    <button class="cta primary" onclick={click(set_call(true))}>
                        {"Join Angel Oasis"}
                    </button>
                </div>
            </section>

            <section class="section booking reveal" id="book">
                <div class="booking-card">
                    <header class="booking-header">
                        <p class="eyebrow">{"Reservations"}</p>
                        <h2>{"Book Your Appointment"}</h2>
                        <p class="booking-intro">
                            {"Fill out the form below and our team will contact you to confirm your session."}
                        </p>
                    </header>
                    <BookingForm />
                </div>
            </section>

            <style>
                {r#"
                .page {
                    overflow-x: hidden;
                }

                .hero {
                    position: relative;
                    min-height: 100vh;
                    overflow: hidden;
                    display: flex;
                    flex-direction: column;
                }

                .hero-bg {
                    position: absolute;
                    inset: 0;
                    background:
                        radial-gradient(ellipse at 70% 30%, rgba(214, 176, 97, 0.25), transparent 60%),
                        linear-gradient(160deg, #1f160b 0%, #0d0905 70%);
                    transform: translateY(calc(var(--scrollY, 0) * 0.3px));
                }

                .hero-grid {
                    position: absolute;
                    inset: 0;
                    background-image:
                        linear-gradient(rgba(214, 176, 97, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(214, 176, 97, 0.05) 1px, transparent 1px);
                    background-size: 60px 60px;
                    mask-image: radial-gradient(ellipse at center, black 30%, transparent 75%);
                }

                .hero-glow {
                    position: absolute;
                    width: 520px;
                    height: 520px;
                    right: -120px;
                    top: 20%;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(214, 176, 97, 0.35), transparent 70%);
                    filter: blur(40px);
                    transform: translateY(calc(var(--scrollY, 0) * -0.15px));
                }

                .hero-content {
                    position: relative;
                    z-index: 2;
                    flex: 1;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 3rem;
                    padding: 2rem 6vw 6rem;
                }

                .hero-text {
                    animation: fadeLeft 0.7s ease-out both;
                }

                .hero-text h1 {
                    font-family: var(--font-display);
                    font-size: clamp(3rem, 8vw, 6rem);
                    line-height: 1;
                    color: #fff8ea;
                    margin: 1rem 0 2rem;
                    animation: fadeUp 0.8s ease-out 0.2s both;
                }

                .hero-text h1 span {
                    display: block;
                    color: #d6b061;
                    font-style: italic;
                }

                .hero-floating-badge {
                    max-width: 280px;
                    padding: 1.8rem;
                    border-radius: 24px;
                    background: rgba(255, 244, 220, 0.06);
                    border: 1px solid rgba(214, 176, 97, 0.3);
                    backdrop-filter: blur(12px);
                    animation: fadeRight 0.7s ease-out 0.2s both;
                    transition: transform 0.25s ease;
                }

                .hero-floating-badge:hover {
                    transform: scale(1.03);
                }

                .hero-floating-badge h3 {
                    font-family: var(--font-display);
                    color: #fff8ea;
                    margin: 0.5rem 0;
                }

                .hero-floating-badge p:last-child {
                    color: #cbbd9f;
                }

                .tiles {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 1.5rem;
                    padding: 4rem 6vw;
                }

                .tile {
                    position: relative;
                    height: 320px;
                    border-radius: 24px;
                    overflow: hidden;
                    display: flex;
                    align-items: flex-end;
                    padding: 1.8rem;
                    transition: transform 0.3s ease;
                }

                .tile:hover {
                    transform: translateY(-10px) scale(1.02);
                }

                .tile.her { background: linear-gradient(160deg, #6b4a2b, #2a1a0d); }
                .tile.him { background: linear-gradient(160deg, #4a3a22, #1a1208); }
                .tile.couples { background: linear-gradient(160deg, #7a5a30, #2d1f10); }

                .tile-overlay {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(180deg, transparent 40%, rgba(0, 0, 0, 0.55));
                }

                .tile p {
                    position: relative;
                    color: #e9dcc0;
                    font-size: 1.1rem;
                }

                .tile p span {
                    font-family: var(--font-display);
                    font-size: 2rem;
                    color: #fff8ea;
                    letter-spacing: 0.1em;
                }

                .section {
                    padding: 6rem 6vw;
                }

                .section-head {
                    max-width: 640px;
                    margin: 0 auto 3rem;
                    text-align: center;
                }

                .section-head h2,
                .sanctuary-copy h2,
                .membership-panel h2,
                .booking-header h2 {
                    font-family: var(--font-display);
                    font-size: clamp(2rem, 4vw, 2.8rem);
                    color: #fff8ea;
                    margin: 0.6rem 0 1rem;
                }

                .section-head p,
                .sanctuary-copy p,
                .booking-intro {
                    color: #cbbd9f;
                    line-height: 1.7;
                }

                .highlight-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                    gap: 1.5rem;
                }

                .highlight-card {
                    padding: 2rem;
                    border-radius: 24px;
                    background: rgba(255, 244, 220, 0.04);
                    border: 1px solid rgba(214, 176, 97, 0.18);
                    transition: transform 0.3s ease;
                }

                .highlight-card:hover {
                    transform: translateY(-10px) perspective(600px) rotateX(4deg) rotateY(-4deg);
                }

                .highlight-card h3 {
                    color: #fff8ea;
                }

                .highlight-card p {
                    color: #cbbd9f;
                }

                .spark {
                    width: 36px;
                    height: 36px;
                    border-radius: 50%;
                    background: radial-gradient(circle, #f7e7c4, #d6b061 60%, transparent 70%);
                }

                .text-link {
                    color: #d6b061;
                    text-decoration: none;
                    font-weight: 600;
                }

                .sanctuary-grid {
                    display: grid;
                    grid-template-columns: 1.2fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .stat-row {
                    display: flex;
                    gap: 2.5rem;
                    margin-top: 2rem;
                }

                .stat {
                    font-family: var(--font-display);
                    font-size: 2.4rem;
                    color: #d6b061;
                    margin: 0;
                }

                .stat-label {
                    font-size: 0.8rem;
                    text-transform: uppercase;
                    letter-spacing: 0.12em;
                }

                .sanctuary-card {
                    position: relative;
                    padding: 2.5rem;
                    border-radius: 28px;
                    background: rgba(255, 244, 220, 0.05);
                    border: 1px solid rgba(214, 176, 97, 0.25);
                    overflow: hidden;
                }

                .sanctuary-card h3 {
                    color: #fff8ea;
                    font-family: var(--font-display);
                }

                .orb {
                    position: absolute;
                    top: -60px;
                    right: -60px;
                    width: 180px;
                    height: 180px;
                    border-radius: 50%;
                    background: radial-gradient(circle, rgba(214, 176, 97, 0.5), transparent 70%);
                    animation: orbFloat 6s ease-in-out infinite;
                }

                @keyframes orbFloat {
                    0%, 100% { transform: translateY(0); }
                    50% { transform: translateY(18px); }
                }

                .timeline {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1.5rem;
                }

                .timeline-card {
                    padding: 2rem;
                    border-left: 1px solid rgba(214, 176, 97, 0.35);
                }

                .timeline-card span {
                    font-family: var(--font-display);
                    font-size: 2rem;
                    color: #d6b061;
                }

                .timeline-card h3 {
                    color: #fff8ea;
                }

                .timeline-card p {
                    color: #cbbd9f;
                }

                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    grid-auto-rows: 220px;
                    gap: 1rem;
                }

                .gallery-card {
                    position: relative;
                    border-radius: 20px;
                    overflow: hidden;
                    background: linear-gradient(140deg, #3a2a16, #120d07);
                    transition: transform 0.3s ease;
                }

                .gallery-card:hover {
                    transform: scale(1.02);
                }

                .gallery-card.g1,
                .gallery-card.g5 {
                    grid-row: span 2;
                }

                .gallery-glow {
                    position: absolute;
                    inset: 0;
                    background: radial-gradient(circle at 30% 20%, rgba(214, 176, 97, 0.3), transparent 60%);
                }

                .membership-panel {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    padding: 3rem;
                    border-radius: 32px;
                    background: linear-gradient(120deg, rgba(214, 176, 97, 0.22), rgba(214, 176, 97, 0.05));
                    border: 1px solid rgba(214, 176, 97, 0.3);
                }

                .membership-panel p {
                    color: #e9dcc0;
                }

                .booking-card {
                    max-width: 720px;
                    margin: 0 auto;
                    padding: 3rem;
                    border-radius: 32px;
                    background: rgba(255, 244, 220, 0.04);
                    border: 1px solid rgba(214, 176, 97, 0.2);
                }

                .menu-overlay,
                .call-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }

                .menu-overlay.open,
                .call-overlay.open {
                    opacity: 1;
                    pointer-events: auto;
                }

                .menu-backdrop,
                .call-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(8, 5, 2, 0.65);
                    backdrop-filter: blur(6px);
                }

                .menu-panel {
                    position: absolute;
                    top: 0;
                    right: 0;
                    bottom: 0;
                    width: min(420px, 100%);
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    background: #1c140b;
                    border-left: 1px solid rgba(214, 176, 97, 0.25);
                    transform: translateX(100%);
                    transition: transform 0.4s cubic-bezier(0.22, 1, 0.36, 1);
                }

                .menu-overlay.open .menu-panel {
                    transform: translateX(0);
                }

                .menu-links {
                    display: flex;
                    flex-direction: column;
                    gap: 1.2rem;
                }

                .menu-link {
                    font-family: var(--font-display);
                    font-size: 2rem;
                    color: #fff8ea;
                    text-decoration: none;
                    transition: color 0.2s ease, transform 0.2s ease;
                }

                .menu-link:hover {
                    color: #d6b061;
                    transform: translateX(6px);
                }

                .call-panel {
                    position: absolute;
                    left: 50%;
                    top: 50%;
                    width: min(480px, calc(100% - 2rem));
                    padding: 2rem;
                    border-radius: 24px;
                    background: #1c140b;
                    border: 1px solid rgba(214, 176, 97, 0.3);
                    color: #e9dcc0;
                    transform: translate(-50%, -45%);
                    transition: transform 0.3s ease;
                }

                .call-overlay.open .call-panel {
                    transform: translate(-50%, -50%);
                }

                .call-panel h3 {
                    font-family: var(--font-display);
                    font-size: 1.6rem;
                    color: #fff8ea;
                }

                .reveal {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                }

                .reveal.in-view {
                    opacity: 1;
                    transform: translateY(0);
                }

                @keyframes fadeLeft {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @keyframes fadeRight {
                    from { opacity: 0; transform: translateX(30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @media (max-width: 900px) {
                    .hero-content,
                    .sanctuary-grid,
                    .membership-panel {
                        flex-direction: column;
                        grid-template-columns: 1fr;
                        align-items: flex-start;
                    }
                    .tiles,
                    .timeline,
                    .gallery-grid {
                        grid-template-columns: 1fr;
                    }
                    .booking-card {
                        padding: 2rem 1.4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

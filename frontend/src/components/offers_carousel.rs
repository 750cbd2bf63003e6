use gloo_timers::callback::Timeout;
use log::warn;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::AUTOPLAY_MS;
use crate::content::OFFERS;
use crate::dom::FrameLoop;
use crate::offers::{progress_fraction, Carousel, CarouselAction};
use crate::Route;

fn step(carousel: &UseStateHandle<Carousel>, action: CarouselAction) {
    let mut next = (**carousel).clone();
    next.apply(action);
    carousel.set(next);
}

#[function_component(OffersCarousel)]
pub fn offers_carousel() -> Html {
    let carousel = use_state(Carousel::default);
    let progress = use_state(|| 0.0_f64);
    let epoch = carousel.epoch();

    // Autoplay: one timeout per position, so a manual move re-arms it.
    {
        let carousel = carousel.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(AUTOPLAY_MS, move || {
                    step(&carousel, CarouselAction::Next);
                });
                move || drop(timeout)
            },
            epoch,
        );
    }

    {
        let progress = progress.clone();
        use_effect_with_deps(
            move |_| {
                progress.set(0.0);
                let frames = FrameLoop::start(move |elapsed| {
                    let fraction = progress_fraction(elapsed, AUTOPLAY_MS as f64);
                    progress.set(fraction);
                    fraction < 1.0
                })
                .map_err(|e| warn!("Carousel progress bar disabled: {}", e))
                .ok();
                move || drop(frames)
            },
            epoch,
        );
    }

    let go_prev = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| step(&carousel, CarouselAction::Prev))
    };
    let go_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| step(&carousel, CarouselAction::Next))
    };

    let offer = OFFERS[carousel.index()];

    html! {
        <section class="special-offers reveal" aria-label="Special offers carousel">
            <div class="carousel-container">
                <div class="carousel-head">
                    <p class="eyebrow">{"Special Offers"}</p>
                    <h2>{"Treat Yourself"}</h2>
                </div>

                <div class="carousel-wrapper">
                    <button type="button" class="carousel-btn carousel-btn-prev" onclick={go_prev} aria-label="Previous offer">
                        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true">
                            <path d="M15 18l-6-6 6-6" />
                        </svg>
                    </button>

                    <div class="carousel-track">
                        <article key={format!("{}:{}", epoch, offer.id)} class={classes!("carousel-card", carousel.direction().slide_class())}>
                            <span class="carousel-card-badge carousel-card-badge-pulse">{offer.badge}</span>
                            <h3>{offer.title}</h3>
                            <p>{offer.description}</p>
                            <Link<Route> to={Route::Booking} classes="carousel-card-cta">
                                {offer.cta}
                            </Link<Route>>
                        </article>
                    </div>

                    <button type="button" class="carousel-btn carousel-btn-next" onclick={go_next} aria-label="Next offer">
                        <svg width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" aria-hidden="true">
                            <path d="M9 18l6-6-6-6" />
                        </svg>
                    </button>
                </div>

                <div class="carousel-dots-wrap">
                    <div class="carousel-dots" role="tablist" aria-label="Offer slides">
                        { for (0..OFFERS.len()).map(|i| {
                            let active = i == carousel.index();
                            let onclick = {
                                let carousel = carousel.clone();
                                Callback::from(move |_: MouseEvent| step(&carousel, CarouselAction::GoTo(i)))
                            };
                            html! {
                                <button
                                    key={i}
                                    type="button"
                                    role="tab"
                                    aria-selected={active.to_string()}
                                    aria-label={format!("Go to offer {}", i + 1)}
                                    class={classes!("carousel-dot", active.then_some("active"))}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                    <div class="carousel-progress-track" aria-hidden="true">
                        <div class="carousel-progress-fill" style={format!("width: {}%;", *progress * 100.0)} />
                    </div>
                </div>
            </div>

            <style>{CAROUSEL_CSS}</style>
        </section>
    }
}

const CAROUSEL_CSS: &str = r#"
    .special-offers {
        padding: 6rem 2rem;
        background: linear-gradient(180deg, #120d07 0%, #1c140b 100%);
    }

    .carousel-container {
        max-width: 960px;
        margin: 0 auto;
        display: flex;
        flex-direction: column;
        gap: 2.5rem;
    }

    .carousel-head {
        text-align: center;
    }

    .carousel-head h2 {
        font-family: var(--font-display);
        font-size: 2.6rem;
        color: #f7e7c4;
        margin: 0.5rem 0 0;
    }

    .carousel-wrapper {
        display: flex;
        align-items: center;
        gap: 1.5rem;
    }

    .carousel-track {
        flex: 1;
        min-height: 280px;
        overflow: hidden;
        display: flex;
        align-items: stretch;
    }

    .carousel-card {
        flex: 1;
        padding: 2.5rem;
        border-radius: 28px;
        background: rgba(255, 244, 220, 0.06);
        border: 1px solid rgba(214, 176, 97, 0.25);
        box-shadow: 0 30px 60px rgba(0, 0, 0, 0.35);
        transition: transform 0.25s ease;
    }

    .carousel-card:hover {
        transform: translateY(-6px);
    }

    .carousel-card.slide-forward {
        animation: slideFromRight 0.5s cubic-bezier(0.22, 1, 0.36, 1) both;
    }

    .carousel-card.slide-backward {
        animation: slideFromLeft 0.5s cubic-bezier(0.22, 1, 0.36, 1) both;
    }

    @keyframes slideFromRight {
        from { transform: translateX(120px) scale(0.92); opacity: 0; filter: blur(8px); }
        to { transform: translateX(0) scale(1); opacity: 1; filter: blur(0); }
    }

    @keyframes slideFromLeft {
        from { transform: translateX(-120px) scale(0.92); opacity: 0; filter: blur(8px); }
        to { transform: translateX(0) scale(1); opacity: 1; filter: blur(0); }
    }

    .carousel-card > * {
        opacity: 0;
        animation: cardContentIn 0.4s ease-out forwards;
    }

    .carousel-card > *:nth-child(1) { animation-delay: 0.15s; }
    .carousel-card > *:nth-child(2) { animation-delay: 0.23s; }
    .carousel-card > *:nth-child(3) { animation-delay: 0.31s; }
    .carousel-card > *:nth-child(4) { animation-delay: 0.39s; }

    @keyframes cardContentIn {
        from { opacity: 0; transform: translateY(20px); }
        to { opacity: 1; transform: translateY(0); }
    }

    .carousel-card-badge {
        display: inline-block;
        padding: 0.35rem 0.9rem;
        border-radius: 999px;
        background: rgba(214, 176, 97, 0.18);
        color: #d6b061;
        font-size: 0.8rem;
        letter-spacing: 0.08em;
        text-transform: uppercase;
    }

    .carousel-card-badge-pulse {
        box-shadow: 0 0 0 0 rgba(214, 176, 97, 0.5);
        animation: cardContentIn 0.4s ease-out 0.15s forwards, badgePulse 2.4s ease-in-out 0.6s infinite;
    }

    @keyframes badgePulse {
        0%, 100% { box-shadow: 0 0 0 0 rgba(214, 176, 97, 0.45); }
        50% { box-shadow: 0 0 0 10px rgba(214, 176, 97, 0); }
    }

    .carousel-card h3 {
        font-family: var(--font-display);
        font-size: 2rem;
        color: #fff8ea;
        margin: 1.2rem 0 0.8rem;
    }

    .carousel-card p {
        color: #cbbd9f;
        line-height: 1.6;
    }

    .carousel-card-cta {
        display: inline-block;
        margin-top: 1.5rem;
        color: #d6b061;
        text-decoration: none;
        font-weight: 600;
        transition: transform 0.2s ease;
    }

    .carousel-card-cta:hover {
        transform: translateX(6px);
    }

    .carousel-btn {
        width: 48px;
        height: 48px;
        border-radius: 50%;
        border: 1px solid rgba(214, 176, 97, 0.35);
        background: transparent;
        color: #d6b061;
        cursor: pointer;
        display: flex;
        align-items: center;
        justify-content: center;
        transition: transform 0.2s ease, background 0.2s ease;
    }

    .carousel-btn:hover {
        transform: scale(1.1);
        background: rgba(214, 176, 97, 0.12);
    }

    .carousel-dots-wrap {
        display: flex;
        flex-direction: column;
        align-items: center;
        gap: 1rem;
    }

    .carousel-dots {
        display: flex;
        gap: 0.75rem;
    }

    .carousel-dot {
        width: 10px;
        height: 10px;
        padding: 0;
        border-radius: 50%;
        border: none;
        background: rgba(214, 176, 97, 0.3);
        cursor: pointer;
        transition: transform 0.2s ease, background 0.2s ease;
    }

    .carousel-dot:hover {
        transform: scale(1.3);
    }

    .carousel-dot.active {
        background: #d6b061;
        transform: scale(1.2);
    }

    .carousel-progress-track {
        width: 160px;
        height: 3px;
        border-radius: 3px;
        background: rgba(214, 176, 97, 0.15);
        overflow: hidden;
    }

    .carousel-progress-fill {
        height: 100%;
        background: #d6b061;
    }

    @media (max-width: 700px) {
        .carousel-wrapper {
            gap: 0.5rem;
        }
        .carousel-card {
            padding: 1.8rem;
        }
        .carousel-btn {
            width: 38px;
            height: 38px;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(selector: &str) -> &'static str {
        let start = CAROUSEL_CSS
            .find(&format!("{} {{", selector))
            .expect("selector present");
        let body = &CAROUSEL_CSS[start..];
        &body[..body.find('}').expect("rule closed")]
    }

    #[test]
    fn progress_fill_jumps_back_to_zero() {
        assert!(!rule(".carousel-progress-fill").contains("transition"));
    }

    #[test]
    fn slide_classes_have_keyframes() {
        assert!(rule(".carousel-card.slide-forward").contains("slideFromRight"));
        assert!(rule(".carousel-card.slide-backward").contains("slideFromLeft"));
    }
}

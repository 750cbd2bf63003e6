use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::booking_form::BookingForm;
use crate::config::BOOKING_META;
use crate::hooks::use_page_meta;
use crate::Route;

#[function_component(BookingPage)]
pub fn booking_page() -> Html {
    use_page_meta(BOOKING_META);

    // Land at the top when arriving from a link further down the landing page
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="booking-page">
            <div class="booking-container">
                <Link<Route> to={Route::Home} classes="booking-back">
                    {"← Back to home"}
                </Link<Route>>
                <div class="booking-card">
                    <header class="booking-header">
                        <p class="booking-eyebrow">{"Reservations"}</p>
                        <h1 class="booking-title">{"Book Your Appointment"}</h1>
                        <p class="booking-intro">
                            {"Fill out the form below and our team will contact you to confirm your session."}
                        </p>
                    </header>
                    <BookingForm />
                </div>
            </div>

            <style>
                {r#"
                .booking-page {
                    min-height: 100vh;
                    padding: 4rem 1.5rem 6rem;
                    background:
                        radial-gradient(ellipse at 80% 0%, rgba(214, 176, 97, 0.18), transparent 55%),
                        #120d07;
                }

                .booking-container {
                    max-width: 720px;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }

                .booking-back {
                    color: #d6b061;
                    text-decoration: none;
                    font-size: 0.95rem;
                }

                .booking-back:hover {
                    text-decoration: underline;
                }

                .booking-page .booking-card {
                    padding: 3rem;
                    border-radius: 32px;
                    background: rgba(255, 244, 220, 0.04);
                    border: 1px solid rgba(214, 176, 97, 0.2);
                    animation: fadeUp 0.6s ease-out both;
                }

                .booking-eyebrow {
                    color: #d6b061;
                    font-size: 0.8rem;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                    margin: 0;
                }

                .booking-title {
                    font-family: var(--font-display);
                    font-size: clamp(2rem, 5vw, 3rem);
                    color: #fff8ea;
                    margin: 0.6rem 0 1rem;
                }

                .booking-intro {
                    color: #cbbd9f;
                    line-height: 1.7;
                    margin-bottom: 2rem;
                }

                @media (max-width: 600px) {
                    .booking-page .booking-card {
                        padding: 2rem 1.4rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::{
    earliest_date, BookingAction, BookingField, BookingState, CONFIRMATION_MESSAGE,
};

fn step(state: &UseStateHandle<BookingState>, action: BookingAction) {
    let mut next = (**state).clone();
    next.apply(action);
    state.set(next);
}

/// Booking form with its thank-you state. Used inline on the landing page
/// and on the booking page.
#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let state = use_state(BookingState::default);
    let min_date = use_memo(|_| earliest_date(), ());

    let on_input = |field: BookingField| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            step(&state, BookingAction::Edit(field, value));
        })
    };

    let on_message = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlTextAreaElement>().value();
            step(&state, BookingAction::Edit(BookingField::Message, value));
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            step(&state, BookingAction::Submit);
        })
    };

    let on_reset = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| step(&state, BookingAction::Reset))
    };

    let request = &state.request;

    html! {
        <>
            {
                if state.submitted {
                    html! {
                        <div class="booking-success" role="status">
                            <p>{CONFIRMATION_MESSAGE}</p>
                            <button type="button" class="cta primary" onclick={on_reset}>
                                {"Submit another request"}
                            </button>
                        </div>
                    }
                } else {
                    html! {
                        <form class="booking-form" onsubmit={on_submit}>
                            <div class="booking-field">
                                <label for={BookingField::Name.key()}>{"Name"}</label>
                                <input
                                    id={BookingField::Name.key()}
                                    name={BookingField::Name.key()}
                                    type="text"
                                    value={request.get(BookingField::Name).to_string()}
                                    oninput={on_input(BookingField::Name)}
                                    required={BookingField::Name.required()}
                                    autocomplete="name"
                                    placeholder="Your name"
                                />
                            </div>
                            <div class="booking-field">
                                <label for={BookingField::Phone.key()}>{"Phone Number"}</label>
                                <input
                                    id={BookingField::Phone.key()}
                                    name={BookingField::Phone.key()}
                                    type="tel"
                                    value={request.get(BookingField::Phone).to_string()}
                                    oninput={on_input(BookingField::Phone)}
                                    required={BookingField::Phone.required()}
                                    autocomplete="tel"
                                    placeholder="+91 0000000000"
                                />
                            </div>
                            <div class="booking-row">
                                <div class="booking-field">
                                    <label for={BookingField::PreferredDate.key()}>{"Preferred Date"}</label>
                                    <input
                                        id={BookingField::PreferredDate.key()}
                                        name={BookingField::PreferredDate.key()}
                                        type="date"
                                        min={(*min_date).clone()}
                                        value={request.get(BookingField::PreferredDate).to_string()}
                                        oninput={on_input(BookingField::PreferredDate)}
                                        required={BookingField::PreferredDate.required()}
                                    />
                                </div>
                                <div class="booking-field">
                                    <label for={BookingField::PreferredTime.key()}>{"Preferred Time"}</label>
                                    <input
                                        id={BookingField::PreferredTime.key()}
                                        name={BookingField::PreferredTime.key()}
                                        type="time"
                                        value={request.get(BookingField::PreferredTime).to_string()}
                                        oninput={on_input(BookingField::PreferredTime)}
                                        required={BookingField::PreferredTime.required()}
                                    />
                                </div>
                            </div>
                            <div class="booking-field">
                                <label for={BookingField::Message.key()}>{"Message"}</label>
                                <textarea
                                    id={BookingField::Message.key()}
                                    name={BookingField::Message.key()}
                                    value={request.get(BookingField::Message).to_string()}
                                    oninput={on_message}
                                    rows="4"
                                    placeholder="Any special requests or notes..."
                                />
                            </div>
                            <button type="submit" class="cta primary booking-submit">
                                {"Request Booking"}
                            </button>
                        </form>
                    }
                }
            }

            <style>
                {r#"
                .booking-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }

                .booking-row {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 1rem;
                }

                .booking-field {
                    display: flex;
                    flex-direction: column;
                    gap: 0.4rem;
                }

                .booking-field label {
                    font-size: 0.85rem;
                    letter-spacing: 0.05em;
                    color: #cbbd9f;
                }

                .booking-field input,
                .booking-field textarea {
                    padding: 0.85rem 1rem;
                    border-radius: 12px;
                    border: 1px solid rgba(214, 176, 97, 0.3);
                    background: rgba(255, 244, 220, 0.04);
                    color: #fff8ea;
                    font: inherit;
                    transition: border-color 0.2s ease, box-shadow 0.2s ease;
                }

                .booking-field input:focus,
                .booking-field textarea:focus {
                    outline: none;
                    border-color: #d6b061;
                    box-shadow: 0 0 0 3px rgba(214, 176, 97, 0.18);
                }

                .booking-field textarea {
                    resize: vertical;
                }

                .booking-submit {
                    align-self: flex-start;
                }

                .booking-success {
                    display: flex;
                    flex-direction: column;
                    align-items: flex-start;
                    gap: 1.5rem;
                    padding: 2rem 0;
                    color: #f7e7c4;
                    font-size: 1.1rem;
                    animation: fadeUp 0.5s ease-out;
                }

                @media (max-width: 600px) {
                    .booking-row {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, Event, EventInit, HtmlElement};

    use super::*;
    use crate::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    fn bubbling(kind: &str) -> Event {
        let init = EventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        Event::new_with_event_init_dict(kind, &init).unwrap()
    }

    fn find(root: &Element, selector: &str) -> Option<Element> {
        root.query_selector(selector).unwrap()
    }

    fn input(root: &Element, field: BookingField) -> HtmlInputElement {
        find(root, &format!("#{}", field.key()))
            .expect("input rendered")
            .unchecked_into()
    }

    async fn fill(root: &Element, field: BookingField, value: &str) {
        let input = input(root, field);
        input.set_value(value);
        input.dispatch_event(&bubbling("input")).unwrap();
        TimeoutFuture::new(0).await;
    }

    #[wasm_bindgen_test]
    async fn submit_shows_confirmation_and_reset_brings_back_empty_form() {
        let body = dom::body().unwrap();
        let root = dom::document().unwrap().create_element("div").unwrap();
        body.append_child(&root).unwrap();

        let app = yew::Renderer::<BookingForm>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;

        fill(&root, BookingField::Name, "Jane").await;
        fill(&root, BookingField::Phone, "+911234567890").await;
        fill(&root, BookingField::PreferredDate, "2026-05-01").await;
        fill(&root, BookingField::PreferredTime, "10:00").await;

        let form = find(&root, ".booking-form").expect("form rendered");
        let submit = bubbling("submit");
        form.dispatch_event(&submit).unwrap();
        TimeoutFuture::new(0).await;

        assert!(submit.default_prevented());
        assert!(find(&root, ".booking-form").is_none());
        let success = find(&root, ".booking-success").expect("confirmation rendered");
        assert_eq!(success.get_attribute("role").as_deref(), Some("status"));
        let message = find(&success, "p").unwrap();
        assert_eq!(
            message.text_content().as_deref(),
            Some("Thank you! We'll contact you shortly to confirm your booking.")
        );

        find(&success, "button")
            .unwrap()
            .unchecked_into::<HtmlElement>()
            .click();
        TimeoutFuture::new(0).await;

        assert!(find(&root, ".booking-success").is_none());
        for field in [
            BookingField::Name,
            BookingField::Phone,
            BookingField::PreferredDate,
            BookingField::PreferredTime,
        ] {
            assert_eq!(input(&root, field).value(), "");
        }

        app.destroy();
        root.remove();
    }
}

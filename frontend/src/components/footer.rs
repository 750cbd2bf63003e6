use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::overlay::Overlay;
use crate::config::{ADDRESS_SHORT, BUSINESS_NAME, EMAIL, PHONE};
use crate::content::LegalTopic;

#[function_component(Footer)]
pub fn footer() -> Html {
    let legal = use_state(|| None::<LegalTopic>);

    let open = |topic: LegalTopic| {
        let legal = legal.clone();
        Callback::from(move |_: MouseEvent| legal.set(Some(topic)))
    };

    let close = {
        let legal = legal.clone();
        Callback::from(move |_: ()| legal.set(None))
    };

    let got_it = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };

    let header = html! {
        <p class="eyebrow">{ (*legal).map(LegalTopic::eyebrow).unwrap_or_default() }</p>
    };

    html! {
        <footer class="footer" id="contacts">
            <div>
                <p class="logo-name">{"Angel Oasis"}</p>
                <p class="logo-sub">{"Spa"}</p>
            </div>
            <div class="location-stats" aria-label="Location stats">
                <p>
                    <span class="location-label">{"Address"}</span>
                    <span>{ADDRESS_SHORT}</span>
                </p>
                <p>
                    <span class="location-label">{"Email"}</span>
                    <span>{EMAIL}</span>
                </p>
                <p>
                    <span class="location-label">{"Phone"}</span>
                    <span>{PHONE}</span>
                </p>
            </div>
            <div class="footer-legal">
                <button type="button" class="footer-legal-link" onclick={open(LegalTopic::Terms)}>
                    {LegalTopic::Terms.title()}
                </button>
                <span class="footer-legal-sep" aria-hidden="true">{"·"}</span>
                <button type="button" class="footer-legal-link" onclick={open(LegalTopic::Privacy)}>
                    {LegalTopic::Privacy.title()}
                </button>
            </div>
            <p>{format!("© 2026 {}", BUSINESS_NAME)}</p>

            <Overlay
                kind="legal-modal"
                open={legal.is_some()}
                on_close={close}
                header={header}
                labelled_by={legal.is_some().then(|| AttrValue::from("legal-modal-title"))}
                portal=true
            >
                {
                    match *legal {
                        Some(topic) => html! {
                            <>
                                <h3 id="legal-modal-title">{topic.title()}</h3>
                                <p>{topic.body()}</p>
                                <div class="call-actions">
                                    <button type="button" class="cta ghost" onclick={got_it}>
                                        {"Got it"}
                                    </button>
                                </div>
                            </>
                        },
                        None => html! {},
                    }
                }
            </Overlay>

            <style>
                {r#"
                .footer {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                    padding: 3rem 2rem;
                    background: #0d0905;
                    color: #a8987a;
                    border-top: 1px solid rgba(214, 176, 97, 0.15);
                }

                .location-stats p {
                    display: flex;
                    gap: 0.75rem;
                    margin: 0.3rem 0;
                }

                .location-label {
                    min-width: 4.5rem;
                    color: #d6b061;
                    text-transform: uppercase;
                    font-size: 0.72rem;
                    letter-spacing: 0.15em;
                }

                .footer-legal {
                    display: flex;
                    align-items: center;
                    gap: 0.6rem;
                }

                .footer-legal-link {
                    background: none;
                    border: none;
                    padding: 0;
                    color: inherit;
                    font: inherit;
                    cursor: pointer;
                    text-decoration: underline;
                    text-underline-offset: 3px;
                }

                .footer-legal-link:hover {
                    color: #d6b061;
                }

                .legal-modal-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 60;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                }

                .legal-modal-overlay.open {
                    opacity: 1;
                    pointer-events: auto;
                }

                .legal-modal-backdrop {
                    position: absolute;
                    inset: 0;
                    background: rgba(8, 5, 2, 0.7);
                    backdrop-filter: blur(6px);
                }

                .legal-modal-panel {
                    position: relative;
                    width: min(560px, calc(100% - 2rem));
                    padding: 2rem;
                    border-radius: 24px;
                    background: #1c140b;
                    border: 1px solid rgba(214, 176, 97, 0.3);
                    color: #e9dcc0;
                    transform: translateY(16px);
                    transition: transform 0.3s ease;
                }

                .legal-modal-overlay.open .legal-modal-panel {
                    transform: translateY(0);
                }

                .legal-modal-panel h3 {
                    font-family: var(--font-display);
                    font-size: 1.6rem;
                    color: #fff8ea;
                }

                .legal-modal-panel p {
                    line-height: 1.7;
                }
                "#}
            </style>
        </footer>
    }
}

use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{ADDRESS, EMAIL, PHONE};
use crate::contact::tel_href;
use crate::content::SECTIONS;
use crate::Route;

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div class="logo">
            <div class="logo-mark" />
            <div>
                <p class="logo-name">{"Angel Oasis"}</p>
                <p class="logo-sub">{"Spa"}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteNavProps {
    pub on_open_menu: Callback<()>,
    pub on_contact: Callback<()>,
}

/// Contact strip, desktop nav and the floating menu button shown over the hero.
#[function_component(SiteNav)]
pub fn site_nav(props: &SiteNavProps) -> Html {
    let open_menu = {
        let on_open_menu = props.on_open_menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_open_menu.emit(());
        })
    };

    let contact = {
        let on_contact = props.on_contact.clone();
        Callback::from(move |_: MouseEvent| on_contact.emit(()))
    };

    html! {
        <>
            <div class="topbar">
                <div class="topbar-left">{ADDRESS}</div>
                <a class="topbar-center" href={format!("mailto:{}", EMAIL)}>{EMAIL}</a>
                <a class="topbar-right" href={tel_href(PHONE)}>{PHONE}</a>
            </div>

            <div class="mobile-logo" aria-label="Angel Oasis">
                <div class="logo-mark" />
            </div>

            <nav class="nav">
                <Link<Route> to={Route::Home}>
                    <Logo />
                </Link<Route>>
                <div class="nav-links">
                    { for SECTIONS.iter().map(|(label, anchor)| html! {
                        <a key={*label} class="nav-link" href={*anchor}>{*label}</a>
                    }) }
                </div>
                <button class="pill" onclick={contact}>{"Contact Us"}</button>
            </nav>

            <button class="fab" onclick={open_menu} aria-label="Open menu">
                <span class="fab-icon" aria-hidden="true">
                    <span></span>
                    <span></span>
                    <span></span>
                </span>
            </button>

            <style>
                {r#"
                .topbar {
                    position: relative;
                    z-index: 3;
                    display: flex;
                    justify-content: space-between;
                    gap: 1rem;
                    padding: 0.6rem 2rem;
                    font-size: 0.78rem;
                    color: #cbbd9f;
                    border-bottom: 1px solid rgba(214, 176, 97, 0.15);
                }

                .topbar a {
                    color: inherit;
                    text-decoration: none;
                }

                .nav {
                    position: relative;
                    z-index: 3;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.2rem 2rem;
                }

                .nav > a {
                    text-decoration: none;
                }

                .logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .logo-mark {
                    width: 40px;
                    height: 40px;
                    border-radius: 50%;
                    background: radial-gradient(circle at 30% 30%, #f7e7c4, #d6b061 55%, #8a6a2c);
                    box-shadow: 0 0 24px rgba(214, 176, 97, 0.45);
                }

                .logo-name {
                    font-family: var(--font-display);
                    font-size: 1.2rem;
                    color: #fff8ea;
                    margin: 0;
                }

                .logo-sub {
                    font-size: 0.7rem;
                    letter-spacing: 0.35em;
                    text-transform: uppercase;
                    color: #d6b061;
                    margin: 0;
                }

                .nav-links {
                    display: flex;
                    gap: 2rem;
                }

                .nav-link {
                    color: #e9dcc0;
                    text-decoration: none;
                    font-size: 0.95rem;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #d6b061;
                }

                .pill {
                    padding: 0.6rem 1.4rem;
                    border-radius: 999px;
                    border: 1px solid #d6b061;
                    background: transparent;
                    color: #d6b061;
                    cursor: pointer;
                    transition: background 0.2s ease, color 0.2s ease;
                }

                .pill:hover {
                    background: #d6b061;
                    color: #1a1208;
                }

                .mobile-logo {
                    display: none;
                }

                .fab {
                    position: fixed;
                    top: 1.5rem;
                    right: 1.5rem;
                    z-index: 20;
                    width: 54px;
                    height: 54px;
                    border-radius: 50%;
                    border: none;
                    background: #d6b061;
                    cursor: pointer;
                    box-shadow: 0 12px 30px rgba(0, 0, 0, 0.35);
                    animation: fadeDown 0.6s ease-out 0.2s both;
                    transition: transform 0.2s ease;
                }

                .fab:hover {
                    transform: scale(1.06);
                }

                .fab-icon {
                    display: flex;
                    flex-direction: column;
                    gap: 5px;
                    align-items: center;
                }

                .fab-icon span {
                    width: 20px;
                    height: 2px;
                    background: #1a1208;
                    border-radius: 2px;
                }

                @keyframes fadeDown {
                    from { opacity: 0; transform: translateY(-8px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (max-width: 900px) {
                    .topbar,
                    .nav {
                        display: none;
                    }
                    .mobile-logo {
                        display: block;
                        position: relative;
                        z-index: 3;
                        padding: 1.5rem;
                    }
                }
                "#}
            </style>
        </>
    }
}

use log::{debug, warn};
use web_sys::{HtmlElement, KeyboardEvent, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom::{self, ScrollLock};

pub fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Class prefix: renders `{kind}-overlay`, `{kind}-backdrop`, `{kind}-panel`.
    pub kind: AttrValue,
    /// Left side of the panel header, next to the close button.
    #[prop_or_default]
    pub header: Option<Html>,
    #[prop_or_default]
    pub labelled_by: Option<AttrValue>,
    /// Render into `document.body` instead of in place.
    #[prop_or_default]
    pub portal: bool,
    #[prop_or_default]
    pub children: Children,
}

/// Shared shell for the menu, call and legal panels. While open it holds a
/// scroll lock, has focus on its close button and closes on Escape.
#[function_component(Overlay)]
pub fn overlay(props: &OverlayProps) -> Html {
    let close_ref = use_node_ref();

    {
        let close_ref = close_ref.clone();
        let kind = props.kind.clone();
        use_effect_with_deps(
            move |open| {
                let lock = if *open {
                    debug!("Opened {} overlay", kind);
                    if let Some(button) = close_ref.cast::<HtmlElement>() {
                        dom::focus(&button);
                    }
                    ScrollLock::engage()
                        .map_err(|e| warn!("Failed to lock scroll: {}", e))
                        .ok()
                } else {
                    None
                };
                move || drop(lock)
            },
            props.open,
        );
    }

    {
        let open = props.open;
        let on_close = props.on_close.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if open && is_dismiss_key(&e.key()) {
                on_close.emit(());
            }
        });
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_close.emit(());
        })
    };

    let kind = &props.kind;
    let overlay = html! {
        <div class={classes!(format!("{}-overlay", kind), props.open.then_some("open"))}
             aria-hidden={(!props.open).to_string()}>
            <div class={format!("{}-backdrop", kind)} onclick={close.clone()} aria-hidden="true" />
            <div class={format!("{}-panel", kind)}
                 role="dialog"
                 aria-modal="true"
                 aria-labelledby={props.labelled_by.clone()}>
                <div class="overlay-header">
                    { for props.header.clone() }
                    <button ref={close_ref} type="button" class="close" onclick={close}>
                        {"Close"}
                    </button>
                </div>
                { for props.children.iter() }
            </div>
        </div>
    };

    if !props.portal {
        return overlay;
    }
    match dom::body() {
        Ok(body) => yew::create_portal(overlay, body.into()),
        Err(e) => {
            warn!("Rendering {} overlay in place: {}", kind, e);
            overlay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_dismisses() {
        assert!(is_dismiss_key("Escape"));
        assert!(is_dismiss_key("Esc"));
    }

    #[test]
    fn other_keys_do_not_dismiss() {
        for key in ["Enter", " ", "Tab", "escape", "q"] {
            assert!(!is_dismiss_key(key));
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;

    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::{Element, KeyboardEventInit};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    thread_local! {
        static CLOSED: Cell<u32> = Cell::new(0);
    }

    #[function_component(LegalHost)]
    fn legal_host() -> Html {
        let open = use_state(|| true);
        let on_close = {
            let open = open.clone();
            Callback::from(move |_: ()| {
                CLOSED.with(|closed| closed.set(closed.get() + 1));
                open.set(false);
            })
        };
        html! {
            <Overlay kind="legal-modal" open={*open} {on_close} portal=true>
                <p>{"Terms"}</p>
            </Overlay>
        }
    }

    fn overflow() -> String {
        dom::body().unwrap().style().get_property_value("overflow").unwrap()
    }

    fn close_button() -> Element {
        dom::document()
            .unwrap()
            .query_selector(".legal-modal-panel .close")
            .unwrap()
            .expect("close button rendered")
    }

    #[wasm_bindgen_test]
    async fn legal_modal_focuses_close_locks_scroll_and_closes_on_escape() {
        let document = dom::document().unwrap();
        let body = dom::body().unwrap();
        body.style().set_property("overflow", "auto").unwrap();
        let root = document.create_element("div").unwrap();
        body.append_child(&root).unwrap();

        let app = yew::Renderer::<LegalHost>::with_root(root.clone()).render();
        TimeoutFuture::new(0).await;

        assert_eq!(document.active_element(), Some(close_button()));
        assert_eq!(overflow(), "hidden");

        let init = KeyboardEventInit::new();
        init.set_key("Escape");
        let escape = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init).unwrap();
        dom::window().unwrap().dispatch_event(&escape).unwrap();
        TimeoutFuture::new(0).await;

        assert_eq!(CLOSED.with(Cell::get), 1);
        assert_eq!(overflow(), "auto");
        let overlay = document.query_selector(".legal-modal-overlay").unwrap().unwrap();
        assert!(!overlay.class_list().contains("open"));

        app.destroy();
        root.remove();
        body.style().remove_property("overflow").unwrap();
    }
}

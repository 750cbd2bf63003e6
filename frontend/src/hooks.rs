use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};
use yew::prelude::*;

use crate::config::{PageMeta, REVEAL_THRESHOLD};
use crate::dom::{self, DomError};

#[hook]
pub fn use_page_meta(meta: PageMeta) {
    use_effect_with_deps(
        |meta| {
            if let Err(e) = dom::set_page_meta(*meta) {
                warn!("Failed to set page metadata: {}", e);
            }
            || ()
        },
        meta,
    );
}

/// Mirrors `window.scrollY` into the `--scrollY` custom property on the root
/// element, at most once per animation frame.
struct ScrollOffsetVar {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    on_scroll: Closure<dyn FnMut()>,
    _write: Rc<Closure<dyn FnMut()>>,
}

impl ScrollOffsetVar {
    fn attach() -> Result<Self, DomError> {
        let window = dom::window()?;
        let pending = Rc::new(Cell::new(None));

        let write = {
            let window = window.clone();
            let pending = pending.clone();
            Rc::new(Closure::wrap(Box::new(move || {
                pending.set(None);
                write_scroll_offset(&window);
            }) as Box<dyn FnMut()>))
        };

        let on_scroll = {
            let window = window.clone();
            let pending = pending.clone();
            let write = write.clone();
            Closure::wrap(Box::new(move || {
                if pending.get().is_some() {
                    return;
                }
                match window.request_animation_frame((*write).as_ref().unchecked_ref()) {
                    Ok(id) => pending.set(Some(id)),
                    Err(e) => warn!("Failed to schedule scroll write: {}", DomError::from(e)),
                }
            }) as Box<dyn FnMut()>)
        };

        write_scroll_offset(&window);
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())?;

        Ok(Self { window, pending, on_scroll, _write: write })
    }
}

impl Drop for ScrollOffsetVar {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("scroll", self.on_scroll.as_ref().unchecked_ref());
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
    }
}

fn write_scroll_offset(window: &Window) {
    let offset = window.scroll_y().unwrap_or(0.0);
    let root = window
        .document()
        .and_then(|document| document.document_element())
        .and_then(|root| root.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(root) = root {
        let _ = root.style().set_property("--scrollY", &offset.to_string());
    }
}

#[hook]
pub fn use_scroll_offset_var() {
    use_effect_with_deps(
        |_| {
            let attached = ScrollOffsetVar::attach()
                .map_err(|e| warn!("Scroll offset tracking disabled: {}", e))
                .ok();
            move || drop(attached)
        },
        (),
    );
}

/// Observes every `.reveal` element on the page and tags it `in-view` the
/// first time enough of it scrolls into the viewport.
struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl RevealObserver {
    fn attach() -> Result<Self, DomError> {
        let callback = Closure::wrap(Box::new(|entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                let _ = target.class_list().add_1("in-view");
                observer.unobserve(&target);
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&REVEAL_THRESHOLD.into());
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        let nodes = dom::document()?.query_selector_all(".reveal")?;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|node| node.dyn_into::<Element>().ok()) {
                observer.observe(&element);
            }
        }

        Ok(Self { observer, _callback: callback })
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

#[hook]
pub fn use_reveal_on_scroll() {
    use_effect_with_deps(
        |_| {
            let attached = RevealObserver::attach()
                .map_err(|e| warn!("Reveal animations disabled: {}", e))
                .ok();
            move || drop(attached)
        },
        (),
    );
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn visible_reveal_element_gets_in_view() {
        let document = dom::document().unwrap();
        let section = document.create_element("section").unwrap();
        section.set_class_name("reveal");
        section.set_attribute("style", "height: 120px;").unwrap();
        let body = dom::body().unwrap();
        body.insert_before(&section, body.first_child().as_ref()).unwrap();

        let observer = RevealObserver::attach().unwrap();
        for _ in 0..40 {
            if section.class_list().contains("in-view") {
                break;
            }
            TimeoutFuture::new(25).await;
        }
        assert!(section.class_list().contains("in-view"));

        drop(observer);
        section.remove();
    }
}

//! Thin helpers over `web_sys` for the few DOM side effects the widgets need.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, Window};

use crate::config::PageMeta;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no {0} element")]
    Missing(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::Missing("body"))
}

pub fn now_ms() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Sets the tab title and the `<meta name="description">` content, creating
/// the meta tag if the host page did not ship one.
pub fn set_page_meta(meta: PageMeta) -> Result<(), DomError> {
    let document = document()?;
    document.set_title(meta.title);

    let tag = match document.query_selector("meta[name=\"description\"]")? {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta")?;
            tag.set_attribute("name", "description")?;
            document.head().ok_or(DomError::Missing("head"))?.append_child(&tag)?;
            tag
        }
    };
    tag.set_attribute("content", meta.description)?;
    Ok(())
}

pub fn focus(element: &HtmlElement) {
    if let Err(e) = element.focus() {
        warn!("Failed to move focus: {}", DomError::from(e));
    }
}

thread_local! {
    // Open lock count and the body overflow value from before the first one.
    static SCROLL_LOCKS: RefCell<(usize, String)> = RefCell::new((0, String::new()));
}

/// Keeps the page from scrolling while held. Locks nest: the body's
/// original `overflow` comes back when the last one is dropped, whatever
/// order the overlays close in.
pub struct ScrollLock {
    body: HtmlElement,
}

impl ScrollLock {
    pub fn engage() -> Result<Self, DomError> {
        let body = body()?;
        let style = body.style();
        SCROLL_LOCKS.with(|locks| -> Result<(), DomError> {
            let mut locks = locks.borrow_mut();
            if locks.0 == 0 {
                locks.1 = style.get_property_value("overflow")?;
                style.set_property("overflow", "hidden")?;
            }
            locks.0 += 1;
            Ok(())
        })?;
        debug!("Scroll lock engaged");
        Ok(Self { body })
    }
}

impl Drop for ScrollLock {
    fn drop(&mut self) {
        let restore = SCROLL_LOCKS.with(|locks| {
            let mut locks = locks.borrow_mut();
            locks.0 = locks.0.saturating_sub(1);
            (locks.0 == 0).then(|| std::mem::take(&mut locks.1))
        });
        if let Some(previous) = restore {
            let style = self.body.style();
            let result = if previous.is_empty() {
                style.remove_property("overflow").map(|_| ())
            } else {
                style.set_property("overflow", &previous)
            };
            if let Err(e) = result {
                warn!("Failed to release scroll lock: {}", DomError::from(e));
            }
            debug!("Scroll lock released");
        }
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Runs `on_frame` once per animation frame with the milliseconds elapsed
/// since the loop started, until it returns false or the loop is dropped.
pub struct FrameLoop {
    window: Window,
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, DomError>
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let window = window()?;
        let pending = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let started = now_ms();

        let first = {
            let window = window.clone();
            let pending = pending.clone();
            let this = callback.clone();
            Closure::wrap(Box::new(move |_timestamp: f64| {
                pending.set(None);
                if !on_frame(now_ms() - started) {
                    return;
                }
                if let Some(next) = this.borrow().as_ref() {
                    match window.request_animation_frame(next.as_ref().unchecked_ref()) {
                        Ok(id) => pending.set(Some(id)),
                        Err(e) => warn!("Failed to schedule frame: {}", DomError::from(e)),
                    }
                }
            }) as Box<dyn FnMut(f64)>)
        };

        pending.set(Some(window.request_animation_frame(first.as_ref().unchecked_ref())?));
        *callback.borrow_mut() = Some(first);

        Ok(Self { window, pending, callback })
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // The closure holds a handle to itself; dropping it here breaks the cycle.
        self.callback.borrow_mut().take();
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn overflow() -> String {
        body().unwrap().style().get_property_value("overflow").unwrap()
    }

    #[wasm_bindgen_test]
    fn scroll_lock_restores_previous_overflow() {
        body().unwrap().style().set_property("overflow", "auto").unwrap();
        {
            let _lock = ScrollLock::engage().unwrap();
            assert_eq!(overflow(), "hidden");
        }
        assert_eq!(overflow(), "auto");
        body().unwrap().style().remove_property("overflow").unwrap();
    }

    #[wasm_bindgen_test]
    fn nested_scroll_locks_release_on_last_drop() {
        let first = ScrollLock::engage().unwrap();
        let second = ScrollLock::engage().unwrap();
        drop(first);
        assert_eq!(overflow(), "hidden");
        drop(second);
        assert_eq!(overflow(), "");
    }

    #[wasm_bindgen_test]
    fn page_meta_updates_title_and_description() {
        let meta = PageMeta { title: "Test Title", description: "Test description" };
        set_page_meta(meta).unwrap();
        let document = document().unwrap();
        assert_eq!(document.title(), "Test Title");
        let tag = document.query_selector("meta[name=\"description\"]").unwrap().unwrap();
        assert_eq!(tag.get_attribute("content").as_deref(), Some("Test description"));
    }
}

//! Browser helpers for the bits Dioxus does not wrap: window scroll,
//! window-level listeners, intersection observers and the body scroll lock.
//!
//! Listeners installed here live for the whole page and are never removed.
//! Callbacks must not touch component state directly; they forward a message
//! into a coroutine.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, ScrollBehavior, ScrollToOptions, Window,
};

use crate::error::DomError;
use crate::state::SectionBounds;

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn scroll_y() -> f64 {
    window().and_then(|w| Ok(w.scroll_y()?)).unwrap_or(0.0)
}

pub fn now_ms() -> f64 {
    window()
        .ok()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn scroll_to_smooth(top: f64) -> Result<(), DomError> {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window()?.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Viewport-relative top of the element with this id
pub fn element_viewport_top(id: &str) -> Result<Option<f64>, DomError> {
    Ok(document()?
        .get_element_by_id(id)
        .map(|el| el.get_bounding_client_rect().top()))
}

/// Mirror the scroll lock onto `body { overflow }`
pub fn set_scroll_locked(locked: bool) -> Result<(), DomError> {
    let body = document()?.body().ok_or(DomError::NoDocument)?;
    let value = if locked { "hidden" } else { "" };
    body.style().set_property("overflow", value)?;
    Ok(())
}

/// Offsets of every `section[id]` in document order
pub fn section_bounds() -> Result<Vec<SectionBounds>, DomError> {
    let nodes = document()?.query_selector_all("section[id]")?;
    let mut sections = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(section) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        sections.push(SectionBounds {
            id: section.id(),
            top: section.offset_top() as f64,
            height: section.client_height() as f64,
        });
    }
    Ok(sections)
}

pub fn open_in_new_tab(url: &str) -> Result<(), DomError> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

pub fn has_touch() -> bool {
    window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("ontouchstart")).unwrap_or(false))
        .unwrap_or(false)
}

/// Call `lucide.createIcons()` if the icon library is loaded
pub fn create_icons() -> Result<bool, DomError> {
    let window: JsValue = window()?.into();
    let lucide = js_sys::Reflect::get(&window, &JsValue::from_str("lucide"))?;
    if lucide.is_undefined() || lucide.is_null() {
        return Ok(false);
    }
    let create = js_sys::Reflect::get(&lucide, &JsValue::from_str("createIcons"))?;
    let create: js_sys::Function = create.dyn_into()?;
    create.call0(&lucide)?;
    Ok(true)
}

/// Listen for a window event for the rest of the page's life
pub fn on_window_event<F>(event: &str, callback: F) -> Result<(), DomError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(callback);
    window()?.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once per element matching `selector`, the first time it
/// becomes visible. Returns how many elements are being watched.
pub fn observe_first_visibility<F>(
    selector: &str,
    threshold: f64,
    root_margin: &str,
    mut callback: F,
) -> Result<u32, DomError>
where
    F: FnMut(Element) + 'static,
{
    let handler = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    observer.unobserve(&target);
                    callback(target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(handler.as_ref().unchecked_ref(), &options)?;
    handler.forget();

    let nodes = document()?.query_selector_all(selector)?;
    let mut watched = 0;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
            watched += 1;
        }
    }
    Ok(watched)
}

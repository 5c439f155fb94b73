use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Date;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::interactions::nav::{scroll_target, SectionBounds};
use crate::interactions::throttle::Throttle;

/// Calls `on_scroll` with the current scroll offset and the page's
/// section layout, at most once per throttle window. Also fires once on
/// mount so the navbar is right before the first scroll.
#[hook]
pub fn use_throttled_scroll(on_scroll: Callback<(f64, Vec<SectionBounds>)>) {
    let throttle = use_mut_ref(Throttle::default);

    use_effect_with_deps(
        move |_| {
            let window = web_sys::window();
            let listener = window.as_ref().map(|window| {
                let window_clone = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    throttle.borrow_mut().run(Date::now(), || {
                        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                        let sections = window_clone
                            .document()
                            .map(|document| read_sections(&document))
                            .unwrap_or_default();
                        on_scroll.emit((scroll_y, sections));
                    });
                }) as Box<dyn FnMut()>);

                if let Err(err) = window
                    .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                {
                    warn!("Could not listen for scroll events: {:?}", err);
                }
                // Initial check
                let _ = scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL);
                scroll_callback
            });

            move || {
                if let (Some(window), Some(scroll_callback)) = (window, listener) {
                    let _ = window
                        .remove_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref());
                }
            }
        },
        (),
    );
}

/// Geometry of every `<section>` in document order. Sections without an
/// id come back with an empty one.
pub fn read_sections(document: &Document) -> Vec<SectionBounds> {
    let Ok(nodes) = document.query_selector_all("section") else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .map(|section| {
            SectionBounds::new(
                section.id(),
                f64::from(section.offset_top()),
                f64::from(section.offset_height()),
            )
        })
        .collect()
}

/// Smooth-scrolls so the section with `id` sits just under the navbar.
/// Does nothing if there is no such section.
pub fn scroll_to_section(id: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(section) = window
        .document()
        .and_then(|document| document.get_element_by_id(id))
        .and_then(|element| element.dyn_into::<HtmlElement>().ok())
    else {
        debug!("No section #{} to scroll to", id);
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_target(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::interactions::visibility::{VisibilityFlag, WatchOptions};

pub fn intersection_observer_supported() -> bool {
    web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

/// Returns `true` from the first render after `node` has scrolled into
/// view, and stays `true`. Without IntersectionObserver support the
/// element is shown straight away.
#[hook]
pub fn use_reveal(node: NodeRef, options: WatchOptions) -> bool {
    let flag = use_mut_ref(VisibilityFlag::default);
    let visible = use_state(|| false);

    {
        let visible = visible.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = match node.cast::<Element>() {
                    Some(element) => watch(&element, options, flag, visible),
                    None => {
                        debug!("Reveal target is not mounted, skipping");
                        None
                    }
                };

                move || {
                    if let Some((observer, _callback)) = watch {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }

    *visible
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

fn watch(
    element: &Element,
    options: WatchOptions,
    flag: Rc<RefCell<VisibilityFlag>>,
    visible: UseStateSetter<bool>,
) -> Option<(IntersectionObserver, ObserverCallback)> {
    if flag.borrow().is_set() {
        return None;
    }
    if !intersection_observer_supported() {
        warn!("IntersectionObserver unavailable, showing element without animation");
        if flag.borrow_mut().force() {
            visible.set(true);
        }
        return None;
    }

    let on_change = {
        let flag = flag.clone();
        let visible = visible.clone();
        Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let flipped = flag.borrow_mut().observe(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    options.threshold,
                );
                if flipped {
                    visible.set(true);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>)
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(options.root_margin);

    match IntersectionObserver::new_with_options(on_change.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(element);
            Some((observer, on_change))
        }
        Err(err) => {
            warn!("Failed to create IntersectionObserver: {:?}", err);
            if flag.borrow_mut().force() {
                visible.set(true);
            }
            None
        }
    }
}

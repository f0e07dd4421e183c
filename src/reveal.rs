use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

pub(crate) const VISIBLE_CLASS: &str = "visible";
const REVEAL_THRESHOLD: f64 = 0.1;

type RevealCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Adds the `visible` class to cards the first time they scroll into view.
pub(crate) struct RevealObserver {
    observer: Option<IntersectionObserver>,
    _callback: Option<RevealCallback>,
}

impl RevealObserver {
    pub(crate) fn new() -> Self {
        match create_observer() {
            Ok((observer, callback)) => Self {
                observer: Some(observer),
                _callback: Some(callback),
            },
            Err(err) => {
                gloo::console::warn!("gallery: reveal observer unavailable", err);
                Self {
                    observer: None,
                    _callback: None,
                }
            }
        }
    }

    pub(crate) fn observe(&self, element: &Element) {
        match self.observer.as_ref() {
            Some(observer) => observer.observe(element),
            None => {
                let _ = element.class_list().add_1(VISIBLE_CLASS);
            }
        }
    }

    pub(crate) fn unobserve(&self, element: &Element) {
        if let Some(observer) = self.observer.as_ref() {
            observer.unobserve(element);
        }
    }

    pub(crate) fn disconnect(&self) {
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}

fn create_observer() -> Result<(IntersectionObserver, RevealCallback), JsValue> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    Ok((observer, callback))
}

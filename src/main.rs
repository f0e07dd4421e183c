mod cards;
mod controller;
mod dom;
mod error;
mod fetch;
mod layout;
mod lightbox;
mod reveal;
mod storage;
mod theme;

use std::cell::RefCell;

use gloo::events::EventListener;
use portfolio_core::GalleryConfig;

use crate::controller::GalleryController;

thread_local! {
    static CONTROLLER: RefCell<Option<GalleryController>> = RefCell::new(None);
}

fn start() {
    match GalleryController::new(GalleryConfig::default()) {
        Ok(controller) => {
            controller.load_manifest();
            CONTROLLER.with(|slot| {
                *slot.borrow_mut() = Some(controller);
            });
        }
        Err(err) => gloo::console::error!("gallery: startup failed", err.to_string()),
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| start()).forget();
    } else {
        start();
    }
}

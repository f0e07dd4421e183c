use std::rc::Rc;

use js_sys::{Object, Reflect};
use portfolio_core::{GalleryConfig, GalleryEvent, GalleryHook};
use wasm_bindgen::prelude::*;
use web_sys::Element;

#[wasm_bindgen]
extern "C" {
    type Masonry;

    #[wasm_bindgen(constructor, catch)]
    fn new(element: &Element, options: &JsValue) -> Result<Masonry, JsValue>;

    #[wasm_bindgen(method)]
    fn layout(this: &Masonry);

    #[wasm_bindgen(method, js_name = reloadItems)]
    fn reload_items(this: &Masonry);

    #[wasm_bindgen(method)]
    fn destroy(this: &Masonry);
}

pub(crate) trait LayoutEngine {
    fn reload_items(&self);
    fn layout(&self);
}

/// Binding to the page's masonry packing library.
struct MasonryLayout {
    masonry: Masonry,
}

impl LayoutEngine for MasonryLayout {
    fn reload_items(&self) {
        self.masonry.reload_items();
    }

    fn layout(&self) {
        self.masonry.layout();
    }
}

impl Drop for MasonryLayout {
    fn drop(&mut self) {
        self.masonry.destroy();
    }
}

/// Used when the masonry script is not on the page.
struct NoLayout;

impl LayoutEngine for NoLayout {
    fn reload_items(&self) {}

    fn layout(&self) {}
}

pub(crate) fn create_layout(container: &Element, config: &GalleryConfig) -> Rc<dyn LayoutEngine> {
    let has_masonry = web_sys::window()
        .map(|window| Reflect::has(&window, &JsValue::from_str("Masonry")).unwrap_or(false))
        .unwrap_or(false);
    if !has_masonry {
        gloo::console::warn!("gallery: masonry not loaded, layout disabled");
        return Rc::new(NoLayout);
    }
    let options = match masonry_options(container, config) {
        Ok(options) => options,
        Err(err) => {
            gloo::console::warn!("gallery: masonry options failed", err);
            return Rc::new(NoLayout);
        }
    };
    match Masonry::new(container, &options) {
        Ok(masonry) => Rc::new(MasonryLayout { masonry }),
        Err(err) => {
            gloo::console::warn!("gallery: masonry init failed", err);
            Rc::new(NoLayout)
        }
    }
}

fn masonry_options(container: &Element, config: &GalleryConfig) -> Result<JsValue, JsValue> {
    let options = Object::new();
    Reflect::set(
        &options,
        &JsValue::from_str("itemSelector"),
        &JsValue::from_str(&config.card_selector),
    )?;
    if container.query_selector(&config.sizer_selector)?.is_some() {
        Reflect::set(
            &options,
            &JsValue::from_str("columnWidth"),
            &JsValue::from_str(&config.sizer_selector),
        )?;
    }
    Reflect::set(
        &options,
        &JsValue::from_str("percentPosition"),
        &JsValue::TRUE,
    )?;
    Ok(options.into())
}

/// Subscribes the layout engine to gallery content changes.
pub(crate) fn layout_hook(engine: Rc<dyn LayoutEngine>) -> GalleryHook {
    Rc::new(move |event: GalleryEvent| match event {
        GalleryEvent::CardsChanged => {
            engine.reload_items();
            engine.layout();
        }
        GalleryEvent::VisibilityChanged | GalleryEvent::ImagesSettled => engine.layout(),
    })
}

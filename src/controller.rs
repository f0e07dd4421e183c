use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::EventListener;
use portfolio_core::{
    load_theme, persist_theme, CardId, EventBus, FilterKey, Gallery, GalleryConfig, GalleryEvent,
    ManifestGroup, SubscriptionId, ViewerKey,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, Event, KeyboardEvent};

use crate::cards::{self, CATEGORY_ATTR};
use crate::dom::{self, PageElements, MANIFEST_ATTR, OPEN_CLASS};
use crate::error::GalleryError;
use crate::fetch;
use crate::layout;
use crate::reveal::RevealObserver;
use crate::storage::LocalStorageStore;
use crate::theme;

/// Owns the page bindings and the gallery model. Every DOM listener lives
/// in a subscription table owned here and is removed when the controller
/// is dropped.
pub(crate) struct GalleryController {
    inner: Rc<ControllerInner>,
    listeners: Vec<EventListener>,
    layout_subscription: SubscriptionId,
}

struct ControllerInner {
    page: PageElements,
    gallery: RefCell<Gallery>,
    store: RefCell<LocalStorageStore>,
    events: EventBus,
    card_nodes: RefCell<HashMap<CardId, Element>>,
    card_listeners: RefCell<Vec<EventListener>>,
    reveal: RevealObserver,
}

impl GalleryController {
    pub(crate) fn new(config: GalleryConfig) -> Result<Self, GalleryError> {
        let page = PageElements::resolve()?;
        let config =
            config.with_manifest_override(page.gallery.get_attribute(MANIFEST_ATTR).as_deref());
        let engine = layout::create_layout(&page.gallery, &config);
        let inner = Rc::new(ControllerInner {
            page,
            gallery: RefCell::new(Gallery::new(config)),
            store: RefCell::new(LocalStorageStore::open()),
            events: EventBus::new(),
            card_nodes: RefCell::new(HashMap::new()),
            card_listeners: RefCell::new(Vec::new()),
            reveal: RevealObserver::new(),
        });
        let layout_subscription = inner.events.subscribe(layout::layout_hook(engine));
        inner.restore_theme();

        let mut controller = Self {
            inner,
            listeners: Vec::new(),
            layout_subscription,
        };
        controller.bind_theme_switch();
        controller.bind_menu();
        controller.bind_filters();
        controller.bind_gallery_clicks();
        controller.bind_lightbox();
        controller.bind_keys();
        Ok(controller)
    }

    /// Fetches the manifest once and fills the gallery. Failures are
    /// logged and leave the gallery empty.
    pub(crate) fn load_manifest(&self) {
        let url = self.inner.gallery.borrow().config().manifest_path.clone();
        let weak = Rc::downgrade(&self.inner);
        spawn_local(async move {
            let result = fetch::fetch_manifest(&url).await;
            let Some(inner) = weak.upgrade() else {
                return;
            };
            match result {
                Ok(groups) => inner.populate(&groups),
                Err(err) => console::error!(format!("gallery: failed to load {url}"), err.to_string()),
            }
        });
    }

    pub(crate) fn populate(&self, groups: &[ManifestGroup]) {
        self.inner.populate(groups);
    }

    fn listen<F>(&mut self, target: &Element, event_type: &'static str, handler: F)
    where
        F: Fn(&ControllerInner, &Event) + 'static,
    {
        let weak = Rc::downgrade(&self.inner);
        self.listeners
            .push(EventListener::new(target, event_type, move |event| {
                if let Some(inner) = weak.upgrade() {
                    handler(&inner, event);
                }
            }));
    }

    fn bind_theme_switch(&mut self) {
        let Some(switch) = self.inner.page.theme_switch.clone() else {
            return;
        };
        self.listen(&switch, "change", |inner, _| inner.toggle_theme());
    }

    fn bind_menu(&mut self) {
        let Some(hamburger) = self.inner.page.hamburger.clone() else {
            return;
        };
        self.listen(&hamburger, "click", |inner, _| {
            if let Some(menu) = inner.page.main_menu.as_ref() {
                let _ = menu.class_list().toggle(OPEN_CLASS);
            }
        });
    }

    fn bind_filters(&mut self) {
        let buttons = self.inner.page.filter_buttons.clone();
        for button in buttons {
            let top_level = dom::is_top_level(&button);
            let source = button.clone();
            self.listen(&button, "click", move |inner, _| {
                let key = source.get_attribute(CATEGORY_ATTR).unwrap_or_default();
                inner.apply_filter(FilterKey::parse(&key), top_level);
            });
        }
    }

    fn bind_gallery_clicks(&mut self) {
        let gallery = self.inner.page.gallery.clone();
        self.listen(&gallery, "click", |inner, event| {
            let Some(target) = event_element(event) else {
                return;
            };
            let Ok(Some(_)) = target.closest("img") else {
                return;
            };
            let card_selector = inner.gallery.borrow().config().card_selector.clone();
            let Ok(Some(card)) = target.closest(&card_selector) else {
                return;
            };
            if let Some(id) = cards::card_id_of(&card) {
                inner.open_card(id);
            }
        });
    }

    fn bind_lightbox(&mut self) {
        let root = self.inner.page.lightbox.root.clone();
        let close = self.inner.page.close.clone();
        let close_inside = close
            .as_ref()
            .is_some_and(|close| root.contains(Some(&**close)));
        {
            let close = close.clone();
            self.listen(&root, "click", move |inner, event| {
                let Some(target) = event_element(event) else {
                    return;
                };
                let on_close = close
                    .as_ref()
                    .is_some_and(|close| close.is_same_node(Some(&*target)));
                if inner.page.lightbox.is_backdrop(&target) || on_close {
                    inner.close_viewer();
                }
            });
        }
        if let Some(close) = close {
            if !close_inside {
                self.listen(&close, "click", |inner, _| inner.close_viewer());
            }
        }
    }

    fn bind_keys(&mut self) {
        let document = self.inner.page.document.clone();
        let weak = Rc::downgrade(&self.inner);
        self.listeners
            .push(EventListener::new(&document, "keydown", move |event| {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                inner.viewer_key(ViewerKey::from_key(&event.key()));
            }));
    }

    #[cfg(test)]
    fn gallery(&self) -> std::cell::Ref<'_, Gallery> {
        self.inner.gallery.borrow()
    }
}

impl Drop for GalleryController {
    fn drop(&mut self) {
        self.listeners.clear();
        self.inner.clear_cards();
        self.inner.events.unsubscribe(self.layout_subscription);
    }
}

impl ControllerInner {
    fn emit_all(&self, events: Vec<GalleryEvent>) {
        for event in events {
            self.events.emit(event);
        }
    }

    fn theme_key(&self) -> String {
        self.gallery.borrow().config().theme_key.clone()
    }

    fn restore_theme(&self) {
        let mode = load_theme(&*self.store.borrow(), &self.theme_key());
        if !mode.is_dark() {
            return;
        }
        theme::apply_theme(&self.page.body, mode);
        if let Some(switch) = self.page.theme_switch.as_ref() {
            switch.set_checked(true);
        }
    }

    fn toggle_theme(&self) {
        let Some(switch) = self.page.theme_switch.as_ref() else {
            return;
        };
        let key = self.theme_key();
        let mode = persist_theme(&mut *self.store.borrow_mut(), &key, switch.checked());
        theme::apply_theme(&self.page.body, mode);
    }

    fn clear_cards(&self) {
        self.card_listeners.borrow_mut().clear();
        self.reveal.disconnect();
        for (_, node) in self.card_nodes.borrow_mut().drain() {
            node.remove();
        }
    }

    fn populate(self: &Rc<Self>, groups: &[ManifestGroup]) {
        self.clear_cards();
        let (cards, mut events) = self.gallery.borrow_mut().load_manifest(groups);
        for card in &cards {
            let element = match cards::build_card(&self.page.document, card) {
                Ok(element) => element,
                Err(err) => {
                    console::warn!("gallery: failed to build card", err.to_string());
                    events.extend(self.gallery.borrow_mut().image_failed(card.id));
                    continue;
                }
            };
            let weak = Rc::downgrade(self);
            let on_load = image_listener(&weak, &element.image, "load", card.id, true);
            let on_error = image_listener(&weak, &element.image, "error", card.id, false);
            self.card_listeners.borrow_mut().extend([on_load, on_error]);
            element.image.set_src(&card.image_src);
            if let Err(err) = self.page.gallery.append_child(&element.root) {
                console::warn!("gallery: failed to append card", err);
            }
            self.reveal.observe(&element.root);
            self.card_nodes.borrow_mut().insert(card.id, element.root);
        }
        console::log!("gallery: manifest loaded", cards.len());
        self.emit_all(events);
    }

    fn image_settled(&self, id: CardId, loaded: bool) {
        let events = {
            let mut gallery = self.gallery.borrow_mut();
            if loaded {
                gallery.image_loaded(id)
            } else {
                gallery.image_failed(id)
            }
        };
        if !loaded {
            let node = self.card_nodes.borrow_mut().remove(&id);
            if let Some(node) = node {
                self.reveal.unobserve(&node);
                node.remove();
            }
        }
        self.emit_all(events);
    }

    fn apply_filter(&self, key: FilterKey, top_level: bool) {
        if top_level {
            if let Some(menu) = self.page.main_menu.as_ref() {
                let _ = menu.class_list().remove_1(OPEN_CLASS);
            }
        }
        let (changes, events) = self.gallery.borrow().apply_filter(&key);
        {
            let nodes = self.card_nodes.borrow();
            for (id, visible) in changes {
                if let Some(node) = nodes.get(&id) {
                    cards::set_card_visible(node, visible);
                }
            }
        }
        self.emit_all(events);
    }

    fn open_card(&self, id: CardId) {
        let view = self.gallery.borrow_mut().open_card(id);
        if let Some(view) = view {
            self.page.lightbox.render(&view);
        }
    }

    fn viewer_key(&self, key: ViewerKey) {
        let view = self.gallery.borrow_mut().viewer_key(key);
        if let Some(view) = view {
            self.page.lightbox.render(&view);
        }
    }

    fn close_viewer(&self) {
        let view = self.gallery.borrow_mut().close_viewer();
        self.page.lightbox.render(&view);
    }
}

fn image_listener(
    weak: &Weak<ControllerInner>,
    image: &web_sys::HtmlImageElement,
    event_type: &'static str,
    id: CardId,
    loaded: bool,
) -> EventListener {
    let weak = weak.clone();
    EventListener::once(image, event_type, move |_| {
        if let Some(inner) = weak.upgrade() {
            inner.image_settled(id, loaded);
        }
    })
}

fn event_element(event: &Event) -> Option<Element> {
    event.target()?.dyn_into::<Element>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gloo::timers::future::TimeoutFuture;
    use portfolio_core::parse_manifest;
    use wasm_bindgen_test::*;
    use web_sys::{HtmlElement, HtmlInputElement, KeyboardEventInit};

    wasm_bindgen_test_configure!(run_in_browser);

    const FIXTURE: &str = r#"
        <input type="checkbox" id="theme-switch">
        <button class="hamburger">menu</button>
        <nav class="main-menu open">
            <button class="filter-btn" id="filter-all" data-category="all">All</button>
            <button class="filter-btn" id="filter-digital" data-category="digital_art">Digital</button>
            <div class="dropdown-menu">
                <button class="filter-btn" id="filter-painting" data-category="painting">Painting</button>
            </div>
        </nav>
        <div class="gallery"></div>
        <div id="lightbox" class="hidden">
            <span class="close">x</span>
            <img id="lightbox-img">
            <p id="lightbox-title"></p>
            <p id="lightbox-medium"></p>
            <p id="lightbox-year"></p>
            <p id="lightbox-description"></p>
        </div>
    "#;

    const MANIFEST: &str = r#"[
        {"folder": "student", "category": ["all_work", "student_work", "painting"],
         "images": [{"file": "sunset.jpg", "title": "Sunset", "medium": "Oil", "year": "2019"}]},
        {"folder": "mine", "category": ["all_work", "my_work", "digital_art"],
         "images": [
            {"file": "robot.png", "title": "Robot", "description": "Mech"},
            {"file": "ship.png", "title": "Ship"}
         ]}
    ]"#;

    fn document() -> web_sys::Document {
        web_sys::window()
            .and_then(|window| window.document())
            .expect("document available")
    }

    fn test_root() -> Element {
        let document = document();
        if let Some(root) = document.get_element_by_id("gallery-test-root") {
            return root;
        }
        let root = document.create_element("div").expect("create test root");
        root.set_id("gallery-test-root");
        document
            .body()
            .expect("body")
            .append_child(&root)
            .expect("append test root");
        root
    }

    fn mount() {
        test_root().set_inner_html(FIXTURE);
        let body = document().body().expect("body");
        let _ = body.class_list().remove_2("dark-mode", "light-mode");
    }

    fn by_id<T: JsCast>(id: &str) -> T {
        document()
            .get_element_by_id(id)
            .expect("element present")
            .unchecked_into()
    }

    fn text(id: &str) -> String {
        by_id::<Element>(id).text_content().unwrap_or_default()
    }

    fn click(element: &Element) {
        element.unchecked_ref::<HtmlElement>().click();
    }

    fn press(key: &str) {
        let init = KeyboardEventInit::new();
        init.set_key(key);
        let event = KeyboardEvent::new_with_keyboard_event_init_dict("keydown", &init)
            .expect("create key event");
        let _ = document().dispatch_event(&event);
    }

    fn card_images() -> Vec<Element> {
        let nodes = document()
            .query_selector_all(".gallery .card img")
            .expect("query cards");
        (0..nodes.length())
            .filter_map(|index| nodes.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn populated() -> GalleryController {
        mount();
        let controller = GalleryController::new(GalleryConfig::default()).expect("controller");
        controller.populate(&parse_manifest(MANIFEST).expect("manifest"));
        controller
    }

    #[wasm_bindgen_test]
    fn builds_one_card_per_entry() {
        let controller = populated();
        assert_eq!(card_images().len(), 3);
        assert_eq!(controller.gallery().snapshot().len(), 3);
        let labels: Vec<String> = {
            let nodes = document().query_selector_all(".card .category").expect("query");
            (0..nodes.length())
                .filter_map(|index| nodes.get(index))
                .map(|node| node.text_content().unwrap_or_default())
                .collect()
        };
        assert_eq!(labels, vec!["Painting", "Digital Art", "Digital Art"]);
    }

    #[wasm_bindgen_test]
    fn filter_hides_non_matching_and_closes_menu() {
        let _controller = populated();
        click(&by_id("filter-digital"));
        let images = card_images();
        let display = |image: &Element| {
            image
                .parent_element()
                .expect("card")
                .unchecked_into::<HtmlElement>()
                .style()
                .get_property_value("display")
                .unwrap_or_default()
        };
        assert_eq!(display(&images[0]), "none");
        assert_eq!(display(&images[1]), "inline-block");
        let menu = document().query_selector(".main-menu").unwrap().unwrap();
        assert!(!menu.class_list().contains(OPEN_CLASS));

        menu.class_list().add_1(OPEN_CLASS).unwrap();
        click(&by_id("filter-painting"));
        assert!(menu.class_list().contains(OPEN_CLASS));
        assert_eq!(display(&images[0]), "inline-block");

        click(&by_id("filter-all"));
        assert!(card_images().iter().all(|image| display(image) == "inline-block"));
    }

    #[wasm_bindgen_test]
    fn lightbox_opens_navigates_and_closes() {
        let controller = populated();
        let images = card_images();
        click(&images[2]);
        assert_eq!(text("lightbox-title"), "Ship");
        assert!(!by_id::<Element>("lightbox").class_list().contains("hidden"));

        press("ArrowRight");
        assert_eq!(controller.gallery().viewer().current_index(), Some(0));
        assert_eq!(text("lightbox-title"), "Sunset");
        assert_eq!(text("lightbox-medium"), "Medium: Oil");
        assert_eq!(text("lightbox-year"), "Year: 2019");

        press("ArrowLeft");
        assert_eq!(text("lightbox-title"), "Ship");

        press("Enter");
        assert_eq!(text("lightbox-title"), "Ship");

        press("Escape");
        assert_eq!(text("lightbox-title"), "");
        assert_eq!(text("lightbox-medium"), "");
        assert_eq!(text("lightbox-description"), "");
        assert_eq!(by_id::<Element>("lightbox-img").get_attribute("src").as_deref(), Some(""));
        assert!(by_id::<Element>("lightbox").class_list().contains("hidden"));
    }

    #[wasm_bindgen_test]
    fn backdrop_click_closes_but_content_click_does_not() {
        let _controller = populated();
        click(&card_images()[1]);
        click(&by_id("lightbox-title"));
        assert_eq!(text("lightbox-title"), "Robot");
        click(&by_id("lightbox"));
        assert_eq!(text("lightbox-title"), "");

        click(&card_images()[1]);
        let close = document().query_selector(".close").unwrap().unwrap();
        click(&close);
        assert_eq!(text("lightbox-description"), "");
    }

    #[wasm_bindgen_test]
    fn theme_toggle_persists_and_restores() {
        let key = GalleryConfig::default().theme_key;
        let storage = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .expect("local storage");
        let _ = storage.remove_item(&key);
        mount();
        {
            let _controller = GalleryController::new(GalleryConfig::default()).expect("controller");
            let switch: HtmlInputElement = by_id("theme-switch");
            assert!(!switch.checked());
            switch.click();
            assert_eq!(storage.get_item(&key).ok().flatten().as_deref(), Some("dark"));
            assert!(document().body().unwrap().class_list().contains("dark-mode"));
        }

        mount();
        let _controller = GalleryController::new(GalleryConfig::default()).expect("controller");
        let switch: HtmlInputElement = by_id("theme-switch");
        assert!(switch.checked());
        let body = document().body().unwrap();
        assert!(body.class_list().contains("dark-mode"));
        assert!(!body.class_list().contains("light-mode"));
        let _ = storage.remove_item(&key);
    }

    #[wasm_bindgen_test]
    fn dropped_controller_stops_listening() {
        let controller = populated();
        click(&card_images()[0]);
        assert_eq!(text("lightbox-title"), "Sunset");
        drop(controller);
        assert!(card_images().is_empty());
        press("Escape");
        assert_eq!(text("lightbox-title"), "Sunset");
    }

    #[wasm_bindgen_test]
    async fn missing_images_prune_their_cards() {
        let controller = populated();
        for _ in 0..40 {
            if card_images().is_empty() {
                break;
            }
            TimeoutFuture::new(50).await;
        }
        assert!(card_images().is_empty());
        assert_eq!(controller.gallery().live_count(), 0);
        assert_eq!(controller.gallery().snapshot().len(), 3);
        assert_eq!(controller.gallery().pending_loads(), 0);
    }

    fn mount_with_manifest(manifest: &str) -> GalleryController {
        mount();
        document()
            .query_selector(".gallery")
            .expect("query gallery")
            .expect("gallery present")
            .set_attribute(MANIFEST_ATTR, manifest)
            .expect("set manifest attribute");
        GalleryController::new(GalleryConfig::default()).expect("controller")
    }

    fn json_data_url(body: &str) -> String {
        format!(
            "data:application/json,{}",
            String::from(js_sys::encode_uri_component(body))
        )
    }

    fn card_count() -> u32 {
        document()
            .query_selector_all(".gallery .card")
            .expect("query cards")
            .length()
    }

    #[wasm_bindgen_test]
    async fn missing_manifest_leaves_gallery_empty() {
        let controller = mount_with_manifest("missing.json");
        assert_eq!(controller.gallery().config().manifest_path, "missing.json");
        controller.load_manifest();
        TimeoutFuture::new(500).await;
        assert_eq!(card_count(), 0);
        assert!(controller.gallery().snapshot().is_empty());
    }

    #[wasm_bindgen_test]
    async fn malformed_manifest_leaves_gallery_empty() {
        let controller = mount_with_manifest(&json_data_url("<html>not a manifest</html>"));
        controller.load_manifest();
        TimeoutFuture::new(500).await;
        assert_eq!(card_count(), 0);
        assert!(controller.gallery().snapshot().is_empty());
    }

    #[wasm_bindgen_test]
    async fn fetched_manifest_fills_gallery() {
        let controller = mount_with_manifest(&json_data_url(MANIFEST));
        controller.load_manifest();
        for _ in 0..40 {
            if !controller.gallery().snapshot().is_empty() {
                break;
            }
            TimeoutFuture::new(50).await;
        }
        assert_eq!(controller.gallery().snapshot().len(), 3);
    }

    #[wasm_bindgen_test]
    fn missing_gallery_is_a_startup_error() {
        test_root().set_inner_html("<div id=\"lightbox\"></div>");
        let Err(err) = GalleryController::new(GalleryConfig::default()) else {
            panic!("controller should not start without a gallery");
        };
        assert!(matches!(err, GalleryError::MissingElement(".gallery")));
    }
}

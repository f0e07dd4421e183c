use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement, HtmlInputElement};

use crate::error::GalleryError;
use crate::lightbox::Lightbox;

pub(crate) const THEME_SWITCH_ID: &str = "theme-switch";
pub(crate) const LIGHTBOX_ID: &str = "lightbox";
pub(crate) const LIGHTBOX_IMG_ID: &str = "lightbox-img";
pub(crate) const LIGHTBOX_TITLE_ID: &str = "lightbox-title";
pub(crate) const LIGHTBOX_MEDIUM_ID: &str = "lightbox-medium";
pub(crate) const LIGHTBOX_YEAR_ID: &str = "lightbox-year";
pub(crate) const LIGHTBOX_DESCRIPTION_ID: &str = "lightbox-description";

pub(crate) const GALLERY_SELECTOR: &str = ".gallery";
pub(crate) const CLOSE_SELECTOR: &str = ".close";
pub(crate) const HAMBURGER_SELECTOR: &str = ".hamburger";
pub(crate) const MAIN_MENU_SELECTOR: &str = ".main-menu";
pub(crate) const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
pub(crate) const DROPDOWN_SELECTOR: &str = ".dropdown-menu";

pub(crate) const MANIFEST_ATTR: &str = "data-manifest";
pub(crate) const OPEN_CLASS: &str = "open";

/// Elements of the page markup the gallery drives.
pub(crate) struct PageElements {
    pub(crate) document: Document,
    pub(crate) body: HtmlElement,
    pub(crate) theme_switch: Option<HtmlInputElement>,
    pub(crate) gallery: Element,
    pub(crate) lightbox: Lightbox,
    pub(crate) close: Option<Element>,
    pub(crate) hamburger: Option<Element>,
    pub(crate) main_menu: Option<Element>,
    pub(crate) filter_buttons: Vec<Element>,
}

impl PageElements {
    pub(crate) fn resolve() -> Result<Self, GalleryError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(GalleryError::NoWindow)?;
        let body = document.body().ok_or(GalleryError::MissingElement("body"))?;
        let gallery = query(&document, GALLERY_SELECTOR)?
            .ok_or(GalleryError::MissingElement(GALLERY_SELECTOR))?;
        let root = document
            .get_element_by_id(LIGHTBOX_ID)
            .ok_or(GalleryError::MissingElement(LIGHTBOX_ID))?;
        let image = document
            .get_element_by_id(LIGHTBOX_IMG_ID)
            .and_then(|element| element.dyn_into::<HtmlImageElement>().ok())
            .ok_or(GalleryError::MissingElement(LIGHTBOX_IMG_ID))?;
        let lightbox = Lightbox {
            root,
            image,
            title: optional_by_id(&document, LIGHTBOX_TITLE_ID),
            medium: optional_by_id(&document, LIGHTBOX_MEDIUM_ID),
            year: optional_by_id(&document, LIGHTBOX_YEAR_ID),
            description: optional_by_id(&document, LIGHTBOX_DESCRIPTION_ID),
        };
        let theme_switch = optional_by_id(&document, THEME_SWITCH_ID)
            .and_then(|element| element.dyn_into::<HtmlInputElement>().ok());
        let close = optional(&document, CLOSE_SELECTOR);
        let hamburger = optional(&document, HAMBURGER_SELECTOR);
        let main_menu = optional(&document, MAIN_MENU_SELECTOR);
        let filter_buttons = query_all(&document, FILTER_BUTTON_SELECTOR)?;
        Ok(Self {
            document,
            body,
            theme_switch,
            gallery,
            lightbox,
            close,
            hamburger,
            main_menu,
            filter_buttons,
        })
    }
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, GalleryError> {
    Ok(document.query_selector(selector)?)
}

fn optional(document: &Document, selector: &'static str) -> Option<Element> {
    let element = document.query_selector(selector).ok().flatten();
    if element.is_none() {
        gloo::console::warn!("gallery: optional element missing", selector);
    }
    element
}

fn optional_by_id(document: &Document, id: &'static str) -> Option<Element> {
    let element = document.get_element_by_id(id);
    if element.is_none() {
        gloo::console::warn!("gallery: optional element missing", id);
    }
    element
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, GalleryError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        if let Some(element) = nodes.get(index).and_then(|node| node.dyn_into::<Element>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

/// Filter buttons outside a dropdown count as top-level navigation.
pub(crate) fn is_top_level(button: &Element) -> bool {
    button.closest(DROPDOWN_SELECTOR).ok().flatten().is_none()
}

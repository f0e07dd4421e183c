use portfolio_core::{Card, CardId};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlImageElement};

use crate::error::GalleryError;

pub(crate) const CARD_CLASS: &str = "card";
pub(crate) const CARD_ID_ATTR: &str = "data-card-id";
pub(crate) const CATEGORY_ATTR: &str = "data-category";
const THUMB_WIDTH: u32 = 300;
const THUMB_HEIGHT: u32 = 400;

pub(crate) struct CardElement {
    pub(crate) root: Element,
    pub(crate) image: HtmlImageElement,
}

/// Builds the card markup. The image `src` is left unset so load
/// listeners can be attached first.
pub(crate) fn build_card(document: &Document, card: &Card) -> Result<CardElement, GalleryError> {
    let root = document.create_element("div")?;
    root.set_class_name(CARD_CLASS);
    root.set_attribute(CARD_ID_ATTR, &card.id.0.to_string())?;
    root.set_attribute(CATEGORY_ATTR, &card.category_attr())?;
    root.set_attribute("data-title", &card.title)?;
    root.set_attribute("data-medium", &card.medium)?;
    root.set_attribute("data-year", &card.year)?;
    root.set_attribute("data-description", &card.description)?;

    let image = HtmlImageElement::new()?;
    image.set_alt(&card.title);
    image.set_attribute("loading", "lazy")?;
    image.set_width(THUMB_WIDTH);
    image.set_height(THUMB_HEIGHT);

    let title = document.create_element("p")?;
    title.set_class_name("title");
    title.set_text_content(Some(&card.title));

    let category = document.create_element("p")?;
    category.set_class_name("category");
    category.set_text_content(Some(&card.label));

    root.append_child(&image)?;
    root.append_child(&title)?;
    root.append_child(&category)?;
    Ok(CardElement { root, image })
}

pub(crate) fn card_id_of(element: &Element) -> Option<CardId> {
    element
        .get_attribute(CARD_ID_ATTR)?
        .parse::<usize>()
        .ok()
        .map(CardId)
}

pub(crate) fn set_card_visible(element: &Element, visible: bool) {
    let Some(element) = element.dyn_ref::<HtmlElement>() else {
        return;
    };
    let display = if visible { "inline-block" } else { "none" };
    let _ = element.style().set_property("display", display);
}

use portfolio_core::ViewerView;
use web_sys::{Element, HtmlImageElement};

pub(crate) const HIDDEN_CLASS: &str = "hidden";
pub(crate) const FADE_IN_CLASS: &str = "fade-in";

/// Lightbox overlay elements. Text fields missing from the markup are
/// skipped.
pub(crate) struct Lightbox {
    pub(crate) root: Element,
    pub(crate) image: HtmlImageElement,
    pub(crate) title: Option<Element>,
    pub(crate) medium: Option<Element>,
    pub(crate) year: Option<Element>,
    pub(crate) description: Option<Element>,
}

impl Lightbox {
    pub(crate) fn render(&self, view: &ViewerView) {
        self.image.set_src(&view.image_src);
        set_text(self.title.as_ref(), &view.title);
        set_text(self.medium.as_ref(), &view.medium);
        set_text(self.year.as_ref(), &view.year);
        set_text(self.description.as_ref(), &view.description);
        let classes = self.root.class_list();
        if view.open {
            let _ = classes.remove_1(HIDDEN_CLASS);
            let _ = classes.add_1(FADE_IN_CLASS);
        } else {
            let _ = classes.add_1(HIDDEN_CLASS);
            let _ = classes.remove_1(FADE_IN_CLASS);
        }
    }

    pub(crate) fn is_backdrop(&self, target: &Element) -> bool {
        self.root.is_same_node(Some(&**target))
    }
}

fn set_text(element: Option<&Element>, value: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(value));
    }
}

use portfolio_core::preference::{DARK_CLASS, LIGHT_CLASS};
use portfolio_core::ThemeMode;
use web_sys::HtmlElement;

/// Sets exactly one of the two mode classes on the root view.
pub(crate) fn apply_theme(body: &HtmlElement, mode: ThemeMode) {
    let classes = body.class_list();
    let _ = classes.toggle_with_force(DARK_CLASS, mode.is_dark());
    let _ = classes.toggle_with_force(LIGHT_CLASS, !mode.is_dark());
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn modes_are_mutually_exclusive() {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .expect("document available");
        let element: HtmlElement = document
            .create_element("div")
            .expect("create div")
            .unchecked_into();
        apply_theme(&element, ThemeMode::Dark);
        assert!(element.class_list().contains(DARK_CLASS));
        assert!(!element.class_list().contains(LIGHT_CLASS));
        apply_theme(&element, ThemeMode::Light);
        assert!(!element.class_list().contains(DARK_CLASS));
        assert!(element.class_list().contains(LIGHT_CLASS));
    }
}

use std::fmt;

use portfolio_core::ManifestError;
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone)]
pub(crate) enum GalleryError {
    NoWindow,
    MissingElement(&'static str),
    Js(String),
    Http { status: u16, url: String },
    Manifest(ManifestError),
}

impl fmt::Display for GalleryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GalleryError::NoWindow => write!(f, "no window or document available"),
            GalleryError::MissingElement(selector) => {
                write!(f, "required element '{selector}' not found")
            }
            GalleryError::Js(message) => write!(f, "javascript error: {message}"),
            GalleryError::Http { status, url } => write!(f, "GET {url} returned {status}"),
            GalleryError::Manifest(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for GalleryError {}

impl From<JsValue> for GalleryError {
    fn from(value: JsValue) -> Self {
        GalleryError::Js(js_err(value))
    }
}

impl From<ManifestError> for GalleryError {
    fn from(value: ManifestError) -> Self {
        GalleryError::Manifest(value)
    }
}

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    // Error objects stringify to `{}`, so read the message directly.
    if let Some(error) = error.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    "js error".to_string()
}

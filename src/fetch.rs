use portfolio_core::{parse_manifest, ManifestGroup};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::error::GalleryError;

pub(crate) async fn fetch_manifest(url: &str) -> Result<Vec<ManifestGroup>, GalleryError> {
    let window = web_sys::window().ok_or(GalleryError::NoWindow)?;
    let value = JsFuture::from(window.fetch_with_str(url)).await?;
    let response: Response = value.dyn_into()?;
    if !response.ok() {
        return Err(GalleryError::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }
    let text = JsFuture::from(response.text()?).await?;
    let raw = text.as_string().unwrap_or_default();
    Ok(parse_manifest(&raw)?)
}

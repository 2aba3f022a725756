use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use common::credentials::Credential;

/// Reads the bearer token from `document.cookie`.
///
/// Falls back to an empty credential when there is no document or no such
/// cookie; the API then rejects the requests and the page shows its failure
/// views.
pub fn read_credential(cookie_name: &str) -> Credential {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<HtmlDocument>().ok())
        .and_then(|document| document.cookie().ok())
        .and_then(|cookies| Credential::from_cookie_header(&cookies, cookie_name))
        .unwrap_or_default()
}

//! Shared request dispatch
//!
//! Single funnel for every backend call: takes a symbolic [`ApiRequest`]
//! descriptor, performs the fetch with session cookies and the CSRF header,
//! and hands back parsed JSON. Callers that hit any failure here surface the
//! one generic banner message; no retry or per-class recovery exists.

use serde::de::DeserializeOwned;
use spm_common::{ApiRequest, Error};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestCredentials, RequestInit, RequestMode, Response};

/// The only error text end users ever see for network failures.
pub const API_ERROR_MSG: &str = "An API error has occurred!";

/// Name of the cookie Django stores the CSRF token in.
const CSRF_COOKIE: &str = "csrftoken";

/// Fire one request and return the parsed JSON body.
///
/// `bust_cache` forces revalidation, used after tag writes so refreshed
/// thumbnails are not served from the browser HTTP cache.
pub async fn dispatch(
    base: &str,
    request: &ApiRequest,
    bust_cache: bool,
) -> Result<JsValue, JsValue> {
    let url = request.url(base);
    let method = request.method();

    let opts = RequestInit::new();
    opts.set_method(method.as_str());
    opts.set_mode(RequestMode::Cors);
    opts.set_credentials(RequestCredentials::Include);
    if bust_cache {
        opts.set_cache(RequestCache::NoCache);
    }
    let body = request.body();
    if let Some(body) = &body {
        let body = serde_json::to_string(body).map_err(|e| JsValue::from_str(&e.to_string()))?;
        opts.set_body(&JsValue::from_str(&body));
    }

    let fetch_request = Request::new_with_str_and_init(&url, &opts)?;
    fetch_request.headers().set("Accept", "application/json")?;
    if body.is_some() {
        fetch_request
            .headers()
            .set("Content-Type", "application/json")?;
    }
    if method.needs_csrf() {
        if let Some(token) = csrf_token() {
            fetch_request.headers().set("X-CSRFToken", &token)?;
        }
    }

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&fetch_request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&Error::Api(resp.status()).to_string()));
    }

    JsFuture::from(resp.json()?).await
}

/// [`dispatch`], deserialized into a typed response.
pub async fn fetch_json<T: DeserializeOwned>(
    base: &str,
    request: &ApiRequest,
    bust_cache: bool,
) -> Result<T, JsValue> {
    let json = dispatch(base, request, bust_cache).await?;
    serde_wasm_bindgen::from_value(json).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Current CSRF token from the session cookie, if any.
fn csrf_token() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let html_document: web_sys::HtmlDocument = document.dyn_into().ok()?;
    let cookies = html_document.cookie().ok()?;
    csrf_from_cookie(&cookies)
}

/// Extract the CSRF token value from a raw cookie string.
fn csrf_from_cookie(cookies: &str) -> Option<String> {
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        if name.trim() == CSRF_COOKIE && !value.is_empty() {
            Some(value.to_string())
        } else {
            None
        }
    })
}

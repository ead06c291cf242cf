//! マニフェストの取得

use demo_gallery_common::{gallery, DemoEntry};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestCache, RequestInit, Response};

fn js_error(e: JsValue) -> String {
    format!("{:?}", e)
}

/// キャッシュを使わずに demos.json を取得して解析する
pub async fn fetch_manifest(url: &str) -> Result<Vec<DemoEntry>, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_cache(RequestCache::NoStore);

    let request = Request::new_with_str_and_init(url, &opts).map_err(js_error)?;

    let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value.dyn_into().map_err(js_error)?;

    if !resp.ok() {
        return Err(format!("HTTP error: {}", resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?
        .as_string()
        .ok_or_else(|| "response body is not text".to_string())?;

    gallery::parse_manifest(&text).map_err(|e| e.to_string())
}

//! Browser fetch for the diagnostics document.

use anyhow::{anyhow, bail, Context};
use tmd_diagnostics::parse::parse_diagnostics;
use tmd_diagnostics::topic::Topic;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `path` relative to the current page and parse it as a diagnostics
/// document. Fails on network errors, non-success statuses, and parse
/// errors; the caller surfaces the message.
pub async fn load_diagnostics(path: &str) -> anyhow::Result<Vec<Topic>> {
    let window = web_sys::window().ok_or_else(|| anyhow!("no window object"))?;

    let response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|err| anyhow!("fetch failed: {err:?}"))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| anyhow!("fetch did not produce a response"))?;
    if !response.ok() {
        bail!("server returned status {}", response.status());
    }

    let body = response
        .text()
        .map_err(|err| anyhow!("response has no readable body: {err:?}"))?;
    let text = JsFuture::from(body)
        .await
        .map_err(|err| anyhow!("reading response body failed: {err:?}"))?
        .as_string()
        .ok_or_else(|| anyhow!("response body is not text"))?;

    parse_diagnostics(&text).context("parsing diagnostics document")
}

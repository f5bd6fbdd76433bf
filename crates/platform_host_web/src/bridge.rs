//! Browser capability bridge for `platform_host_web` service adapters.
//!
//! This module contains the WASM/JS interop layer for the optimize endpoint
//! plus a non-WASM fallback shim so the crate compiles (and unit-tests) on
//! native targets.

use serde::Deserialize;

/// Raw HTTP reply captured by the fetch bridge before interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HttpReply {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use super::HttpReply;
    use serde_wasm_bindgen::from_value;
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen(inline_js = r#"
export async function post_json(url, payload) {
  const response = await fetch(url, {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: payload,
  });
  const body = await response.text();
  return { status: response.status, body };
}
"#)]
    extern "C" {
        #[wasm_bindgen(catch)]
        async fn post_json(url: &str, payload: &str) -> Result<JsValue, JsValue>;
    }

    pub async fn post_optimize(url: &str, payload: &str) -> Result<HttpReply, String> {
        let value = post_json(url, payload)
            .await
            .map_err(|err| describe_js_error(&err))?;
        from_value::<HttpReply>(value).map_err(|err| format!("malformed bridge reply: {err}"))
    }

    fn describe_js_error(err: &JsValue) -> String {
        err.as_string()
            .or_else(|| {
                js_sys::Reflect::get(err, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|message| message.as_string())
            })
            .unwrap_or_else(|| "network request failed".to_string())
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod imp {
    use super::HttpReply;

    pub async fn post_optimize(_url: &str, _payload: &str) -> Result<HttpReply, String> {
        Err("browser fetch is unavailable outside wasm32".to_string())
    }
}

pub use imp::post_optimize;

//! Fetch-backed optimize-endpoint adapter.

use platform_host::{
    OptimizeError, OptimizeErrorPayload, OptimizeFuture, OptimizeRequest, OptimizeResponse,
    OptimizeService,
};

use crate::bridge;

/// Default relative endpoint path served alongside the shell.
pub const DEFAULT_OPTIMIZE_ENDPOINT: &str = "/api/optimize";

/// Browser optimize adapter that posts JSON through the fetch bridge.
#[derive(Debug, Clone)]
pub struct WebOptimizeService {
    endpoint_url: String,
}

impl WebOptimizeService {
    /// Creates an adapter posting to `endpoint_url`.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }
}

impl Default for WebOptimizeService {
    fn default() -> Self {
        Self::new(DEFAULT_OPTIMIZE_ENDPOINT)
    }
}

impl OptimizeService for WebOptimizeService {
    fn optimize<'a>(
        &'a self,
        request: &'a OptimizeRequest,
    ) -> OptimizeFuture<'a, Result<OptimizeResponse, OptimizeError>> {
        Box::pin(async move {
            let payload = serde_json::to_string(request)
                .map_err(|err| OptimizeError::Transport(format!("encode request: {err}")))?;
            let reply = bridge::post_optimize(&self.endpoint_url, &payload)
                .await
                .map_err(OptimizeError::Transport)?;
            interpret_reply(reply.status, &reply.body)
        })
    }
}

/// Interprets a raw endpoint reply into the typed optimize result.
///
/// A 2xx status must carry an [`OptimizeResponse`] body; anything else is
/// expected to carry the `{ "error": ... }` payload, whose message is passed
/// through verbatim. Bodies that match neither shape become transport errors.
fn interpret_reply(status: u16, body: &str) -> Result<OptimizeResponse, OptimizeError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<OptimizeResponse>(body)
            .map_err(|err| OptimizeError::Transport(format!("malformed response: {err}")));
    }
    match serde_json::from_str::<OptimizeErrorPayload>(body) {
        Ok(payload) => Err(OptimizeError::Api(payload.error)),
        Err(_) => Err(OptimizeError::Transport(format!(
            "optimize endpoint returned HTTP {status}"
        ))),
    }
}

//! HTTP helper for fetching the backend message.
//!
//! Browser builds (`web`): a real HTTP call via `gloo-net`.
//! Native builds: a stub returning an error so the crate compiles and unit
//! tests run without a browser runtime.
//!
//! ERROR HANDLING
//! ==============
//! The caller gets a `Result` with a display-ready reason string. Transport
//! and decode failures take the same path as non-2xx statuses, so the
//! component has exactly one failure branch to log.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use wire::Motd;

/// Backend endpoint queried once per `MessageDisplay` mount. Hardcoded on
/// purpose: the demo has no client-side configuration surface.
#[cfg(any(test, feature = "web"))]
pub(crate) const BACKEND_URL: &str = "http://backend:5000/";

#[cfg(any(test, feature = "web"))]
fn request_failed_message(status: u16) -> String {
    format!("request failed: {status}")
}

/// Fetch the message payload from the backend root endpoint.
///
/// # Errors
///
/// Returns an error string if the request cannot be sent, the server
/// responds with a non-2xx status, or the body does not decode as a
/// [`Motd`] payload.
pub async fn fetch_motd() -> Result<Motd, String> {
    #[cfg(feature = "web")]
    {
        let resp = gloo_net::http::Request::get(BACKEND_URL)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Motd>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "web"))]
    {
        Err("not available without a browser".to_owned())
    }
}

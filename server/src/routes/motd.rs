//! The message endpoint.

use axum::response::Json;
use wire::Motd;

/// Fixed greeting served at the root endpoint.
pub const MOTD_MESSAGE: &str = "Hello from Axum backend!";

/// `GET /` — return the backend message as JSON.
pub async fn current() -> Json<Motd> {
    Json(Motd {
        message: MOTD_MESSAGE.to_owned(),
    })
}

#[cfg(test)]
#[path = "motd_test.rs"]
mod tests;

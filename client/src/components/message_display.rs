//! Message banner fetched from the backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the app's only view. It issues a single fire-and-forget GET when
//! the component mounts and renders whatever the backend returned; every
//! failure is logged and leaves the banner blank.

#[cfg(test)]
#[path = "message_display_test.rs"]
mod message_display_test;

use leptos::prelude::*;

use crate::state::motd::MotdState;

fn display_line(text: &str) -> String {
    format!("Message from backend: {text}")
}

#[cfg(any(test, feature = "web"))]
fn fetch_error_line(reason: &str) -> String {
    format!("Error fetching backend: {reason}")
}

/// Message banner: a fixed heading plus the text fetched from the backend.
///
/// The component body runs once per mount, so exactly one request is issued
/// no matter how often the banner re-renders afterwards.
#[component]
pub fn MessageDisplay() -> impl IntoView {
    let motd = RwSignal::new(MotdState::default());

    #[cfg(feature = "web")]
    {
        let alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let alive_task = alive.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::fetch_motd().await {
                Ok(payload) => {
                    // The signal is disposed with the component; skip the
                    // write if the response arrived after unmount.
                    if alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                        motd.update(|s| s.text = payload.message);
                    }
                }
                Err(e) => log::error!("{}", fetch_error_line(&e)),
            }
        });
        on_cleanup(move || alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    view! {
        <h1>"Leptos Frontend"</h1>
        <p>{move || display_line(&motd.get().text)}</p>
    }
}

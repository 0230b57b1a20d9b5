//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::message_display::MessageDisplay;

/// Root application component rendering the single message view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Motd"/>
        <MessageDisplay/>
    }
}

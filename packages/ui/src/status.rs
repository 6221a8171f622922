use dioxus::prelude::*;

/// Shown while the initial fetch is in flight.
#[component]
pub fn LoadingView() -> Element {
    rsx! {
        div { class: "loading", "Loading..." }
    }
}

/// Full-page message for a failed initial fetch. The user has to reload.
#[component]
pub fn ErrorView(message: String) -> Element {
    rsx! {
        div { class: "error", "Error fetching data: {message}" }
    }
}

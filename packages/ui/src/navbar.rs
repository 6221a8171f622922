use dioxus::prelude::*;

/// Top bar with the app title and placeholder links.
#[component]
pub fn Navbar(title: String) -> Element {
    rsx! {
        header {
            class: "navbar",
            h2 { "{title}" }
            nav {
                a { href: "/", "Home" }
                a { href: "/", "About" }
                a { href: "/", "Contact" }
            }
        }
    }
}

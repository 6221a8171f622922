use dioxus::prelude::*;

const SIDEBAR_LINKS: [&str; 3] = ["Dashboard", "Settings", "Profile"];

/// Left-hand menu. Every entry points back to `/`.
#[component]
pub fn Sidebar() -> Element {
    rsx! {
        aside {
            class: "sidebar",
            ul {
                for label in SIDEBAR_LINKS {
                    li {
                        key: "{label}",
                        a { href: "/", "{label}" }
                    }
                }
            }
        }
    }
}

use dioxus::prelude::*;
use store::DirectoryConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Baked in at build time; there is no runtime configuration in the browser.
const DIRECTORY_TOML: &str = include_str!("../directory.toml");

fn main() {
    dioxus::launch(App);
}

fn load_config() -> DirectoryConfig {
    match DirectoryConfig::from_toml(DIRECTORY_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(
                "Invalid {}, using defaults: {}",
                DirectoryConfig::filename(),
                e
            );
            DirectoryConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::DIRECTORY_CSS }

        ui::UserDirectory { config }
    }
}

use api::{ClientConfig, HttpTransport};
use dioxus::prelude::*;
use ui::UserBoard;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../userboard.toml");

fn main() {
    // `launch` installs the Dioxus logger, which forwards `tracing` to the console.
    dioxus::launch(App);
}

/// Embedded `userboard.toml`, or the defaults if it does not parse.
fn load_config() -> ClientConfig {
    match ClientConfig::from_toml(CONFIG_TOML) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!("Invalid {}, using defaults: {e}", ClientConfig::filename());
            ClientConfig::default()
        }
    }
}

#[component]
fn App() -> Element {
    let config = use_context_provider(load_config);
    use_context_provider(|| HttpTransport::new(&config.base_url));

    use_hook(|| {
        tracing::info!(
            "Userboard ready: form {} {}, table {}",
            config.form.method,
            config.form.action,
            config.table.collection_url
        )
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        header {
            class: "page-header",
            h1 { "Users" }
        }
        UserBoard {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = ClientConfig::from_toml(CONFIG_TOML).unwrap();
        assert_eq!(config.form.action, "/users");
        assert_eq!(config.table.record_prefix, "/user");
    }
}

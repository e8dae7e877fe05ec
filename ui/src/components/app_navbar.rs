use crate::core::{content::PROFILE, lang::Lang, theme::Theme};
use crate::t;
use dioxus::prelude::*;

// Navbar stylesheet (linked on web, inlined in release native builds)
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Sticky top bar: brand mark plus the RU/EN toggle.
///
/// The bar holds no language state of its own. It shows `lang` and reports
/// activation through `on_toggle`; the owner flips and persists the value,
/// which re-renders every language-dependent view.
#[component]
pub fn AppNavbar(lang: Lang, on_toggle: EventHandler<MouseEvent>) -> Element {
    let theme = try_use_context::<Theme>().unwrap_or_default();
    let toggle_label = t!(lang, "nav-toggle-label");

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                a {
                    class: "navbar__brand",
                    href: "#home",
                    style: "color: {theme.accent};",
                    "{PROFILE.brand}"
                }
                button {
                    r#type: "button",
                    class: "navbar__lang",
                    aria_label: "{toggle_label}",
                    title: "{toggle_label}",
                    onclick: move |evt| on_toggle.call(evt),
                    "{lang.label()}"
                }
            }
        }
    }
}

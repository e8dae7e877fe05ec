use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::core::content::{EMBED_TITLE, PROFILE};
use crate::core::lang::Lang;
use crate::t;

/// itch.io showcase in a sandboxed frame.
///
/// Hosts may refuse to be framed and the page cannot observe that, so the
/// fallback sentence and direct link are always rendered under the frame.
#[component]
pub fn Projects(lang: Lang) -> Element {
    let itch = &PROFILE.contacts;

    rsx! {
        section { id: "projects", class: "section projects",
            SectionTitle { {t!(lang, "projects-title")} }
            div { class: "projects__frame-wrap",
                iframe {
                    class: "projects__frame",
                    title: EMBED_TITLE,
                    src: itch.itch_url,
                    "sandbox": "allow-scripts allow-same-origin allow-popups",
                    "referrerpolicy": "no-referrer",
                    "loading": "lazy",
                }
            }
            p { class: "projects__fallback",
                {t!(lang, "projects-fallback")}
                " "
                a {
                    href: itch.itch_url,
                    target: "_blank",
                    rel: "noreferrer",
                    "{itch.itch_display}"
                }
            }
        }
    }
}

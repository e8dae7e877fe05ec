use dioxus::prelude::*;

use crate::core::{content::PROFILE, lang::Lang, theme::Theme};
use crate::t;

#[component]
pub fn Hero(lang: Lang) -> Element {
    let theme = try_use_context::<Theme>().unwrap_or_default();
    let tagline = PROFILE.tagline(lang);

    rsx! {
        section { id: "home", class: "section hero",
            div { class: "hero__intro",
                h1 { class: "hero__name",
                    "{PROFILE.name}"
                    span { class: "hero__role", "{PROFILE.role}" }
                }
                p { class: "hero__tagline", "{tagline}" }
                div { class: "hero__actions",
                    a {
                        class: "button button--ghost",
                        href: "{PROFILE.contacts.telegram}",
                        target: "_blank",
                        rel: "noreferrer",
                        style: "{theme.accent_ring()}",
                        "Telegram"
                    }
                    a { class: "button button--accent", href: "#projects",
                        {t!(lang, "hero-cta-projects")}
                    }
                }
            }
            div { class: "hero__banner",
                div { class: "hero__banner-inner",
                    div { class: "hero__banner-label", style: "color: {theme.accent};",
                        {t!(lang, "hero-banner-label")}
                    }
                    div { class: "hero__banner-caption", {t!(lang, "hero-banner-caption")} }
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::core::content::{ContactCard, PROFILE};
use crate::core::lang::Lang;
use crate::t;

#[component]
pub fn Contacts(lang: Lang) -> Element {
    rsx! {
        section { id: "contacts", class: "section contacts",
            SectionTitle { {t!(lang, "contacts-title")} }
            div { class: "contacts__grid",
                { PROFILE.contact_cards().into_iter().map(render_card) }
            }
        }
    }
}

fn render_card(card: ContactCard) -> Element {
    let ContactCard { label, value, href } = card;

    match href {
        Some(href) => rsx! {
            a {
                key: "{label}",
                class: "card contact-card contact-card--link",
                href: "{href}",
                target: "_blank",
                rel: "noreferrer",
                div { class: "contact-card__label", "{label}" }
                div { class: "contact-card__value", "{value}" }
            }
        },
        None => rsx! {
            div { key: "{label}", class: "card contact-card",
                div { class: "contact-card__label", "{label}" }
                div { class: "contact-card__value", "{value}" }
            }
        },
    }
}

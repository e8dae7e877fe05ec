//! Content Store: the static profile and its contact channels.

use super::lang::Lang;
use crate::t;

/// Immutable profile record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub role: &'static str,
    /// Upper-case brand mark shown in the navigation bar.
    pub brand: &'static str,
    pub contacts: Contacts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contacts {
    pub telegram: &'static str,
    pub discord: &'static str,
    pub itch_url: &'static str,
    pub itch_display: &'static str,
}

pub static PROFILE: Profile = Profile {
    name: "AlexonMorris",
    role: "3D / Game Designer",
    brand: "ALEXONMORRIS",
    contacts: Contacts {
        telegram: "https://t.me/AxM_Channel",
        discord: "alexonmorris",
        itch_url: "https://alexonmorris.itch.io/",
        itch_display: "alexonmorris.itch.io",
    },
};

/// `title` attribute of the embedded itch.io frame.
pub const EMBED_TITLE: &str = "itch-embed";

impl Profile {
    pub fn tagline(&self, lang: Lang) -> String {
        t!(lang, "hero-tagline")
    }

    pub fn about(&self, lang: Lang) -> String {
        t!(lang, "about-body")
    }

    /// Contact cards in display order.
    pub fn contact_cards(&self) -> [ContactCard; 3] {
        [
            ContactCard {
                label: "Telegram",
                value: self.contacts.telegram,
                href: Some(self.contacts.telegram),
            },
            ContactCard {
                label: "Discord",
                value: self.contacts.discord,
                href: None,
            },
            ContactCard {
                label: "Itch.io",
                value: self.contacts.itch_display,
                href: Some(self.contacts.itch_url),
            },
        ]
    }
}

/// One contact channel. Cards without `href` are display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactCard {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

use dioxus::prelude::*;
use tracing::debug;

use crate::components::{AppNavbar, EffectsOverlay};
use crate::core::{preference::LanguagePreference, storage::SettingsHandle, theme::Theme};

use super::{About, Contacts, Footer, Hero, Projects};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[derive(Props, Clone, PartialEq)]
pub struct PortfolioProps {
    /// Backend the language preference is restored from and saved to.
    pub store: SettingsHandle,
}

/// Flip the page language and persist it. Subscribers (the page root)
/// re-render with the new value.
pub fn toggle_language(mut language: Signal<LanguagePreference>) {
    language.write().toggle();
}

/// The whole page.
///
/// Owns the language preference and provides it, together with the
/// [`Theme`], to descendants; every section receives the active language as
/// a prop.
#[allow(non_snake_case)]
pub fn Portfolio(props: PortfolioProps) -> Element {
    let theme = use_context_provider(Theme::default);
    let language = use_signal(|| LanguagePreference::load(props.store.clone()));
    use_context_provider(|| language);
    let lang = language.read().get();

    debug!(%lang, "portfolio render");

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        div { class: "portfolio", style: "{theme.root_style()}",
            EffectsOverlay {}
            AppNavbar {
                lang,
                on_toggle: move |_| toggle_language(language),
            }
            main {
                Hero { lang }
                Projects { lang }
                About { lang }
                Contacts { lang }
            }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::preference::LANG_KEY;
    use crate::core::storage::MemoryStore;
    use dioxus::dioxus_core::NoOpMutations;

    fn render(store: MemoryStore) -> String {
        let mut dom = VirtualDom::new_with_props(
            Portfolio,
            PortfolioProps {
                store: SettingsHandle::new(store),
            },
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn first_visit_renders_russian_and_persists_it() {
        let store = MemoryStore::default();
        let html = render(store.clone());

        assert!(html.contains("Смотреть проекты"));
        assert!(html.contains(">RU</button>"));
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("ru"));
    }

    #[test]
    fn restores_stored_language() {
        let html = render(MemoryStore::with_entry(LANG_KEY, "en"));
        assert!(html.contains("View Projects"));
        assert!(html.contains("Open for collabs and freelance."));
        assert!(!html.contains("Смотреть проекты"));
    }

    #[test]
    fn sections_render_in_fixed_order() {
        let html = render(MemoryStore::default());
        let order = [
            "fx--grid",
            "id=\"navbar\"",
            "id=\"home\"",
            "id=\"projects\"",
            "id=\"about\"",
            "id=\"contacts\"",
            "<footer",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("{needle} missing")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{html}");
    }

    #[test]
    fn root_carries_accent_and_font() {
        let html = render(MemoryStore::default());
        assert!(html.contains("--accent: #ff9000;"));
        assert!(html.contains("font-family: Molot"));
    }

    #[test]
    fn same_language_renders_identically() {
        let first = render(MemoryStore::with_entry(LANG_KEY, "en"));
        let second = render(MemoryStore::with_entry(LANG_KEY, "en"));
        assert_eq!(first, second);
    }

    #[test]
    fn toggle_rerenders_page_and_persists() {
        let store = MemoryStore::default();
        let mut dom = VirtualDom::new_with_props(
            Portfolio,
            PortfolioProps {
                store: SettingsHandle::new(store.clone()),
            },
        );
        dom.rebuild_in_place();

        let before = dioxus_ssr::render(&dom);
        assert!(before.contains("Смотреть проекты"));
        assert!(before.contains(">RU</button>"));

        // Same path the navbar button takes.
        dom.in_runtime(|| {
            let language = ScopeId::APP
                .in_runtime(|| consume_context::<Signal<LanguagePreference>>());
            toggle_language(language);
        });
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);

        let after = dioxus_ssr::render(&dom);
        assert!(after.contains("View Projects"), "{after}");
        assert!(after.contains("Open for collabs and freelance."));
        assert!(after.contains(">EN</button>"));
        assert!(!after.contains("Смотреть проекты"));
        assert_eq!(store.get(LANG_KEY).as_deref(), Some("en"));
    }
}

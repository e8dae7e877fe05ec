use dioxus::prelude::*;

use crate::components::SectionTitle;
use crate::core::{content::PROFILE, lang::Lang};
use crate::t;

#[component]
pub fn About(lang: Lang) -> Element {
    let body = PROFILE.about(lang);

    rsx! {
        section { id: "about", class: "section about",
            SectionTitle { {t!(lang, "about-title")} }
            div { class: "card about__body", "{body}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lang: Lang) -> String {
        fn root(lang: Lang) -> Element {
            rsx! { About { lang } }
        }
        let mut dom = VirtualDom::new_with_props(root, lang);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn shows_biography_for_language() {
        let ru = render(Lang::Ru);
        assert!(ru.contains("О себе"));
        assert!(ru.contains("Готов к коллабам и фрилансу."));

        let en = render(Lang::En);
        assert!(en.contains("About"));
        assert!(en.contains("Open for collabs and freelance."));
        assert!(!en.contains("Готов"));
    }
}

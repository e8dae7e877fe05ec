use dioxus::prelude::*;

#[component]
pub fn SectionTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "section__title", {children} }
    }
}

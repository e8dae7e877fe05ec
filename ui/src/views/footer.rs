use dioxus::prelude::*;

use crate::core::format::{copyright_line, current_year};

#[component]
pub fn Footer() -> Element {
    let line = copyright_line(current_year());

    rsx! {
        footer { class: "footer", "{line}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_current_year() {
        let mut dom = VirtualDom::new(Footer);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        assert!(html.contains(&format!("© {} AlexonMorris", current_year())), "{html}");
        assert!(html.contains("All rights reserved."));
    }
}

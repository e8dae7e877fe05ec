use dioxus::prelude::*;

use ui::core::storage;
use ui::Portfolio;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Browser builds persist to `localStorage`.
    let store = use_hook(storage::default_store);

    rsx! {
        document::Title { "AlexonMorris — 3D / Game Designer" }
        Portfolio { store }
    }
}

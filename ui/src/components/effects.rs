use dioxus::prelude::*;

/// A decorative full-viewport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layer {
    pub name: &'static str,
    /// Layers above the content (grain, scanlines, vignette) vs the grid
    /// behind it.
    pub above_content: bool,
}

/// Bottom-to-top paint order.
pub const LAYERS: [Layer; 4] = [
    Layer {
        name: "grid",
        above_content: false,
    },
    Layer {
        name: "grain",
        above_content: true,
    },
    Layer {
        name: "scanlines",
        above_content: true,
    },
    Layer {
        name: "vignette",
        above_content: true,
    },
];

/// Always-on retro overlay. Layers never receive pointer input (see
/// `.fx` in the theme stylesheet).
#[component]
pub fn EffectsOverlay() -> Element {
    rsx! {
        { LAYERS.iter().map(|layer| {
            let depth = if layer.above_content { "fx--above" } else { "fx--below" };
            rsx! {
                div {
                    key: "{layer.name}",
                    class: "fx {depth} fx--{layer.name}",
                    aria_hidden: "true",
                }
            }
        })}
    }
}

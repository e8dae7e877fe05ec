//! Shared UI crate for the AlexonMorris portfolio. Every component, the
//! content store and language handling live here; platform crates only
//! launch [`Portfolio`] with a settings backend.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    mod app_navbar;
    pub use app_navbar::AppNavbar;

    mod effects;
    pub use effects::{EffectsOverlay, Layer, LAYERS};

    mod section_title;
    pub use section_title::SectionTitle;
}

pub use views::Portfolio;

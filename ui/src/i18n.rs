//! Localization catalog for `axm-portfolio-ui`.
//!
//! Every localized string on the page lives in one Fluent file per language,
//! keyed by `section-field` message IDs:
//! ```text
//! i18n.toml
//! i18n/
//!   ru/axm_portfolio_ui.ftl   (fallback/reference)
//!   en/axm_portfolio_ui.ftl
//! ```
//!
//! Files are embedded with `rust-embed` and loaded through `i18n-embed`. Each
//! supported [`Lang`] gets its own lazily built loader, so a lookup never
//! depends on (or mutates) a process-wide "current language":
//! ```ignore
//! use crate::t;
//! let title = t!(lang, "projects-title");
//! ```
//!
//! `t!` goes through `fl!`, which checks message IDs against the fallback
//! file at compile time.
use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;

use crate::core::lang::Lang;

pub use i18n_embed_fl::fl; // Re-export for the `t!` macro.

/// Localized lookup for a given [`Lang`].
///
/// ```ignore
/// let title = t!(lang, "about-title");
/// ```
#[macro_export]
macro_rules! t {
    ($lang:expr, $key:literal) => {
        $crate::i18n::fl!($crate::i18n::loader($lang), $key)
    };
}

/// Fluent "domain": the crate name as `fl!` resolves it, which is also the
/// FTL filename in every locale folder.
const DOMAIN: &str = "axm_portfolio_ui";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

static RU: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::Ru));
static EN: Lazy<FluentLanguageLoader> = Lazy::new(|| build_loader(Lang::En));

fn build_loader(lang: Lang) -> FluentLanguageLoader {
    let loader = FluentLanguageLoader::new(DOMAIN, Lang::default().langid());
    if let Err(err) = i18n_embed::select(&loader, &Localizations, &[lang.langid()]) {
        tracing::warn!(%err, %lang, "failed loading catalog; continuing with fallback");
    }
    loader
}

/// Loader serving `lang` (with the fallback catalog behind it).
pub fn loader(lang: Lang) -> &'static FluentLanguageLoader {
    match lang {
        Lang::Ru => &*RU,
        Lang::En => &*EN,
    }
}

/// List available (embedded) language folders.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

//! The RU and EN catalogs must define the same messages, each exactly once.
//!
//! `fl!` already rejects IDs missing from the fallback (ru) catalog at compile
//! time; these checks cover the other direction and copy/paste slips.

use std::collections::BTreeMap;

const RU: &str = include_str!("../i18n/ru/axm_portfolio_ui.ftl");
const EN: &str = include_str!("../i18n/en/axm_portfolio_ui.ftl");

/// Message ID -> number of definitions. Comments, blank lines, terms and
/// attribute/continuation lines are skipped.
fn message_ids(src: &str) -> BTreeMap<&str, usize> {
    let mut ids = BTreeMap::new();
    for line in src.lines() {
        if line.starts_with([' ', '\t', '#', '-', '.']) {
            continue;
        }
        if let Some((id, _)) = line.split_once('=') {
            let id = id.trim();
            if !id.is_empty() {
                *ids.entry(id).or_insert(0) += 1;
            }
        }
    }
    ids
}

fn message_values(src: &str) -> impl Iterator<Item = (&str, &str)> {
    src.lines()
        .filter(|line| !line.starts_with([' ', '\t', '#', '-', '.']))
        .filter_map(|line| line.split_once('='))
        .map(|(id, value)| (id.trim(), value.trim()))
}

#[test]
fn both_catalogs_define_the_same_messages() {
    let ru: Vec<_> = message_ids(RU).into_keys().collect();
    let en: Vec<_> = message_ids(EN).into_keys().collect();

    assert!(!ru.is_empty(), "ru catalog parsed empty");
    assert_eq!(ru, en, "ru and en catalogs disagree on message IDs");
}

#[test]
fn no_message_is_defined_twice() {
    for (locale, src) in [("ru", RU), ("en", EN)] {
        let dups: Vec<_> = message_ids(src)
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(id, count)| format!("{id} (x{count})"))
            .collect();
        assert!(dups.is_empty(), "{locale} defines messages more than once: {dups:?}");
    }
}

#[test]
fn no_message_is_blank() {
    for (locale, src) in [("ru", RU), ("en", EN)] {
        for (id, value) in message_values(src) {
            assert!(!value.is_empty(), "{locale}: `{id}` has no text");
        }
    }
}

#[test]
fn localized_sections_actually_differ() {
    let ru: BTreeMap<_, _> = message_values(RU).collect();
    let en: BTreeMap<_, _> = message_values(EN).collect();

    for id in ["projects-title", "about-title", "contacts-title", "hero-tagline", "about-body"] {
        assert_ne!(ru.get(id), en.get(id), "`{id}` is untranslated");
    }
}

//! Marker table for the pasted-sheet format.
//!
//! A [`MarkerRule`] captures the text between `start` and the next `end`
//! and turns it into a two-locale value according to its [`SplitRule`].
//! The table encodes the one known export layout:
//!
//! ```text
//! name  <English name> Magasin <French name>
//! description  <English text> Votre <French text>
//! url  https://<en> https://<fr>
//! image ...
//! ```

use std::sync::LazyLock;

use regex::Regex;
use storeld_core::{FieldKey, LocalizedValue};

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https://\S+").expect("valid url regex"));

/// How a captured segment becomes an English/French pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitRule {
    /// Split immediately before each occurrence of the token that is not at
    /// the very start of the segment. English is the text before the first
    /// split, French the piece from the first split up to the second.
    BeforeToken(&'static str),
    /// First `https://` URL is English, second is French.
    Urls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerRule {
    pub field: FieldKey,
    pub start: &'static str,
    pub end: &'static str,
    pub split: SplitRule,
}

/// Rules for the store sheet export. Markers are case-sensitive.
pub const DEFAULT_RULES: [MarkerRule; 3] = [
    MarkerRule {
        field: FieldKey::Name,
        start: "name",
        end: "description",
        split: SplitRule::BeforeToken("Magasin"),
    },
    MarkerRule {
        field: FieldKey::Description,
        start: "description",
        end: "url",
        split: SplitRule::BeforeToken("Votre"),
    },
    MarkerRule {
        field: FieldKey::Url,
        start: "url",
        end: "image",
        split: SplitRule::Urls,
    },
];

impl SplitRule {
    pub(crate) fn apply(self, segment: &str) -> LocalizedValue {
        match self {
            SplitRule::BeforeToken(token) => split_before_token(segment, token),
            SplitRule::Urls => split_urls(segment),
        }
    }
}

pub(crate) fn split_before_token(segment: &str, token: &str) -> LocalizedValue {
    let mut boundaries = segment
        .match_indices(token)
        .map(|(idx, _)| idx)
        .filter(|&idx| idx > 0);

    match boundaries.next() {
        Some(start) => {
            let end = boundaries.next().unwrap_or(segment.len());
            LocalizedValue::new(segment[..start].trim(), segment[start..end].trim())
        }
        None => LocalizedValue::new(segment.trim(), ""),
    }
}

pub(crate) fn split_urls(segment: &str) -> LocalizedValue {
    let mut urls = URL_RE.find_iter(segment).map(|m| m.as_str());
    let en = urls.next().unwrap_or_default();
    let fr = urls.next().unwrap_or_default();
    LocalizedValue::new(en, fr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_before_token_divides_at_token() {
        let value = split_before_token(
            "\tCool&Simple Atwater Market\tMagasin Cool&simple Atwater\n",
            "Magasin",
        );
        assert_eq!(value.en, "Cool&Simple Atwater Market");
        assert_eq!(value.fr, "Magasin Cool&simple Atwater");
    }

    #[test]
    fn split_before_token_without_token_keeps_english_only() {
        let value = split_before_token("  Plateau Store  ", "Magasin");
        assert_eq!(value.en, "Plateau Store");
        assert_eq!(value.fr, "");
    }

    #[test]
    fn split_before_token_ignores_token_at_segment_start() {
        let value = split_before_token("Magasin only", "Magasin");
        assert_eq!(value.en, "Magasin only");
        assert_eq!(value.fr, "");
    }

    #[test]
    fn split_before_token_french_stops_at_next_occurrence() {
        let value = split_before_token("Magasin A Magasin B Magasin C", "Magasin");
        assert_eq!(value.en, "Magasin A");
        assert_eq!(value.fr, "Magasin B");
    }

    #[test]
    fn split_before_token_drops_text_after_second_token() {
        let value = split_before_token(" Fresh food. Votre épicerie. Votre choix. ", "Votre");
        assert_eq!(value.en, "Fresh food.");
        assert_eq!(value.fr, "Votre épicerie.");
    }

    #[test]
    fn split_before_token_is_case_sensitive() {
        let value = split_before_token("Shop magasin", "Magasin");
        assert_eq!(value.en, "Shop magasin");
        assert_eq!(value.fr, "");
    }

    #[test]
    fn split_urls_takes_first_two_in_order() {
        let value = split_urls(
            " https://example.com/en/store\thttps://example.com/store https://example.com/third",
        );
        assert_eq!(value.en, "https://example.com/en/store");
        assert_eq!(value.fr, "https://example.com/store");
    }

    #[test]
    fn split_urls_single_url_leaves_french_empty() {
        let value = split_urls("\nhttps://example.com/en\n");
        assert_eq!(value.en, "https://example.com/en");
        assert_eq!(value.fr, "");
    }

    #[test]
    fn split_urls_ignores_plain_http() {
        let value = split_urls("http://example.com https://secure.example.com");
        assert_eq!(value.en, "https://secure.example.com");
        assert_eq!(value.fr, "");
    }

    #[test]
    fn split_urls_none_found_is_empty_pair() {
        let value = split_urls("no links here");
        assert_eq!(value, LocalizedValue::default());
    }

    #[test]
    fn default_rules_cover_distinct_fields() {
        let fields: Vec<FieldKey> = DEFAULT_RULES.iter().map(|r| r.field).collect();
        assert_eq!(
            fields,
            vec![FieldKey::Name, FieldKey::Description, FieldKey::Url]
        );
    }
}

use std::collections::HashSet;

use regex::Regex;
use storeld_core::{FieldKey, FieldSet, DEFAULT_MAX_INPUT_BYTES};

use crate::error::ExtractError;
use crate::markers::{MarkerRule, DEFAULT_RULES};

/// Outcome of one extraction pass. Every variant carries a complete field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Extraction {
    /// Input was empty or whitespace-only; the defaults are returned unchanged.
    Empty { fields: FieldSet },
    /// At least one marker rule matched and overwrote its field.
    Parsed {
        fields: FieldSet,
        matched: Vec<FieldKey>,
    },
    /// Input was present but no marker rule matched; the defaults are returned.
    Unrecognized { fields: FieldSet },
}

impl Extraction {
    #[must_use]
    pub fn fields(&self) -> &FieldSet {
        match self {
            Extraction::Empty { fields }
            | Extraction::Parsed { fields, .. }
            | Extraction::Unrecognized { fields } => fields,
        }
    }

    #[must_use]
    pub fn into_fields(self) -> FieldSet {
        match self {
            Extraction::Empty { fields }
            | Extraction::Parsed { fields, .. }
            | Extraction::Unrecognized { fields } => fields,
        }
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Extraction::Empty { .. } => "empty",
            Extraction::Parsed { .. } => "parsed",
            Extraction::Unrecognized { .. } => "unrecognized",
        }
    }

    /// Fields overwritten from the input; empty unless [`Extraction::Parsed`].
    #[must_use]
    pub fn matched(&self) -> &[FieldKey] {
        match self {
            Extraction::Parsed { matched, .. } => matched,
            Extraction::Empty { .. } | Extraction::Unrecognized { .. } => &[],
        }
    }
}

#[derive(Debug)]
struct CompiledRule {
    rule: MarkerRule,
    span: Regex,
}

/// Marker-driven extractor over a fixed default field set.
#[derive(Debug)]
pub struct Extractor {
    defaults: FieldSet,
    rules: Vec<CompiledRule>,
    max_input_bytes: usize,
}

impl Extractor {
    /// Compile `rules` against `defaults`.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidRule`] if a rule has an empty marker,
    /// two rules target the same field, or a span pattern fails to compile.
    pub fn new(
        defaults: FieldSet,
        rules: &[MarkerRule],
        max_input_bytes: usize,
    ) -> Result<Self, ExtractError> {
        let mut seen = HashSet::new();
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            if rule.start.is_empty() || rule.end.is_empty() {
                return Err(ExtractError::InvalidRule {
                    field: rule.field,
                    reason: "start and end markers must be non-empty".to_string(),
                });
            }
            if !seen.insert(rule.field) {
                return Err(ExtractError::InvalidRule {
                    field: rule.field,
                    reason: "field already has a rule".to_string(),
                });
            }

            let pattern = format!(
                "(?s){}(.*?){}",
                regex::escape(rule.start),
                regex::escape(rule.end)
            );
            let span = Regex::new(&pattern).map_err(|e| ExtractError::InvalidRule {
                field: rule.field,
                reason: e.to_string(),
            })?;

            compiled.push(CompiledRule { rule: *rule, span });
        }

        Ok(Self {
            defaults,
            rules: compiled,
            max_input_bytes,
        })
    }

    /// Extractor for the store sheet export with the default size limit.
    ///
    /// # Panics
    ///
    /// Does not panic: [`DEFAULT_RULES`] have non-empty, distinct, escaped markers.
    #[must_use]
    pub fn with_defaults(defaults: FieldSet) -> Self {
        Self::new(defaults, &DEFAULT_RULES, DEFAULT_MAX_INPUT_BYTES)
            .expect("default marker rules compile")
    }

    /// Run every marker rule over `raw`.
    ///
    /// Rules are independent: a rule whose span is absent leaves its field at
    /// the default and does not affect the others.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::InputTooLarge`] if `raw` exceeds the size limit.
    pub fn extract(&self, raw: &str) -> Result<Extraction, ExtractError> {
        if raw.len() > self.max_input_bytes {
            return Err(ExtractError::InputTooLarge {
                len: raw.len(),
                limit: self.max_input_bytes,
            });
        }

        if is_blank(raw) {
            return Ok(Extraction::Empty {
                fields: self.defaults.clone(),
            });
        }

        let mut fields = self.defaults.clone();
        let mut matched = Vec::new();

        for compiled in &self.rules {
            let field = compiled.rule.field;
            let Some(segment) = compiled.span.captures(raw).and_then(|c| c.get(1)) else {
                tracing::debug!(
                    %field,
                    start = compiled.rule.start,
                    end = compiled.rule.end,
                    "marker span not found, keeping default"
                );
                continue;
            };

            let value = compiled.rule.split.apply(segment.as_str());
            tracing::debug!(%field, en = %value.en, fr = %value.fr, "marker span extracted");
            fields.set(field, value);
            matched.push(field);
        }

        if matched.is_empty() {
            tracing::debug!(len = raw.len(), "no marker rule matched input");
            Ok(Extraction::Unrecognized { fields })
        } else {
            Ok(Extraction::Parsed { fields, matched })
        }
    }

    /// Extract, falling back to the defaults on any error.
    ///
    /// Never fails; the error is only logged.
    #[must_use]
    pub fn extract_or_default(&self, raw: &str) -> FieldSet {
        match self.extract(raw) {
            Ok(extraction) => extraction.into_fields(),
            Err(e) => {
                tracing::warn!(error = %e, "extraction failed, using default fields");
                self.defaults.clone()
            }
        }
    }
}

/// Whitespace-only check that also treats a byte-order mark as blank, since
/// clipboard text from spreadsheets sometimes carries one.
fn is_blank(raw: &str) -> bool {
    raw.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
#[path = "extractor_test.rs"]
mod tests;

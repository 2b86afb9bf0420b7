//! Session state for one paste-and-generate interaction.
//!
//! The three user actions (edit, generate, copy) are messages to a pure
//! reducer. Side effects come back as an [`Effect`] which [`run`] executes
//! and feeds back as a follow-up action.

use std::collections::VecDeque;
use std::io::Write;

use storeld_core::StoreProfile;
use storeld_extract::{ExtractError, Extraction, Extractor, MarkerRule};
use storeld_schema::SchemaError;

use crate::clipboard::Clipboard;

pub const COPIED_NOTICE: &str = "Copied to clipboard!";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub input: String,
    pub output: String,
    pub error: Option<String>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditInput(String),
    Generate,
    Copy,
    CopySucceeded,
    CopyFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    WriteClipboard(String),
}

/// Extraction plus template generation for one store profile.
#[derive(Debug)]
pub struct Generator {
    profile: StoreProfile,
    extractor: Extractor,
}

impl Generator {
    /// # Errors
    ///
    /// Returns [`ExtractError::InvalidRule`] if `rules` cannot be compiled.
    pub fn new(
        profile: StoreProfile,
        rules: &[MarkerRule],
        max_input_bytes: usize,
    ) -> Result<Self, ExtractError> {
        let extractor = Extractor::new(profile.fields.clone(), rules, max_input_bytes)?;
        Ok(Self { profile, extractor })
    }

    #[must_use]
    pub fn profile(&self) -> &StoreProfile {
        &self.profile
    }

    /// # Errors
    ///
    /// Returns [`ExtractError`] if the input is refused.
    pub fn extract(&self, input: &str) -> Result<Extraction, ExtractError> {
        self.extractor.extract(input)
    }
}

/// Turns pasted input into the finished snippet.
pub trait SnippetSource {
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the snippet cannot be produced.
    fn generate(&self, input: &str) -> Result<String, SchemaError>;
}

impl SnippetSource for Generator {
    /// Extraction problems fall back to the profile defaults and never
    /// reach the caller.
    fn generate(&self, input: &str) -> Result<String, SchemaError> {
        let fields = self.extractor.extract_or_default(input);
        storeld_schema::generate(&self.profile, &fields)
    }
}

/// Apply one action to `session`.
#[must_use]
pub fn reduce<G>(session: &Session, action: Action, generator: &G) -> (Session, Option<Effect>)
where
    G: SnippetSource + ?Sized,
{
    let mut next = session.clone();

    match action {
        Action::EditInput(input) => {
            next.input = input;
            (next, None)
        }
        Action::Generate => {
            match generator.generate(&next.input) {
                Ok(output) => {
                    next.output = output;
                    next.error = None;
                    next.notice = None;
                }
                Err(e) => {
                    next.error = Some(format!("Error generating schema: {e}"));
                    next.notice = None;
                }
            }
            (next, None)
        }
        Action::Copy => {
            if next.output.is_empty() {
                return (next, None);
            }
            let effect = Effect::WriteClipboard(next.output.clone());
            (next, Some(effect))
        }
        Action::CopySucceeded => {
            next.notice = Some(COPIED_NOTICE.to_string());
            (next, None)
        }
        Action::CopyFailed(reason) => {
            next.error = Some(format!("Failed to copy: {reason}"));
            (next, None)
        }
    }
}

/// Drive `actions` through the reducer, executing effects as they appear.
pub fn run<G, C>(
    session: Session,
    actions: impl IntoIterator<Item = Action>,
    generator: &G,
    clipboard: &mut C,
) -> Session
where
    G: SnippetSource + ?Sized,
    C: Clipboard + ?Sized,
{
    let mut queue: VecDeque<Action> = actions.into_iter().collect();
    let mut state = session;

    while let Some(action) = queue.pop_front() {
        let (next, effect) = reduce(&state, action, generator);
        state = next;
        if let Some(effect) = effect {
            queue.push_front(execute(effect, clipboard));
        }
    }

    state
}

fn execute<C>(effect: Effect, clipboard: &mut C) -> Action
where
    C: Clipboard + ?Sized,
{
    match effect {
        Effect::WriteClipboard(text) => match clipboard.write(&text) {
            Ok(()) => Action::CopySucceeded,
            Err(e) => {
                tracing::warn!(error = %e, "clipboard write failed");
                Action::CopyFailed(e.to_string())
            }
        },
    }
}

/// Project `session` onto the terminal: the generated snippet to `out`,
/// the acknowledgment notice to `status`. Errors are left to the caller.
///
/// # Errors
///
/// Returns any I/O error from the writers.
pub fn present(
    session: &Session,
    out: &mut dyn Write,
    status: &mut dyn Write,
) -> std::io::Result<()> {
    if !session.output.is_empty() {
        writeln!(out, "{}", session.output)?;
    }
    if let Some(notice) = &session.notice {
        writeln!(status, "{notice}")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

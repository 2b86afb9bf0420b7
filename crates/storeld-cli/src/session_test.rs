use storeld_core::builtin_profile;
use storeld_extract::DEFAULT_RULES;

use super::*;
use crate::clipboard::ClipboardError;

/// Records every clipboard write.
#[derive(Default)]
struct MemoryClipboard {
    writes: Vec<String>,
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.writes.push(text.to_string());
        Ok(())
    }
}

struct DetachedClipboard;

impl Clipboard for DetachedClipboard {
    fn write(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::NotATerminal)
    }
}

struct BrokenSource;

impl SnippetSource for BrokenSource {
    fn generate(&self, _input: &str) -> Result<String, SchemaError> {
        let source = serde_json::from_str::<u8>("not json").unwrap_err();
        Err(SchemaError::Serialize {
            locale: "en",
            source,
        })
    }
}

fn generator() -> Generator {
    Generator::new(builtin_profile(), &DEFAULT_RULES, 1024 * 1024).unwrap()
}

fn generated(generator: &Generator) -> Session {
    let (session, effect) = reduce(&Session::default(), Action::Generate, generator);
    assert!(effect.is_none());
    session
}

#[test]
fn edit_input_only_changes_input() {
    let (session, effect) = reduce(
        &Session::default(),
        Action::EditInput("name x description".into()),
        &generator(),
    );
    assert!(effect.is_none());
    assert_eq!(session.input, "name x description");
    assert!(session.output.is_empty());
    assert!(session.error.is_none());
}

#[test]
fn generate_with_empty_input_renders_defaults() {
    let session = generated(&generator());
    assert!(session.output.contains("\"name\": \"Cool&Simple Atwater Market\""));
    assert!(session.error.is_none());
}

#[test]
fn generate_clears_previous_error() {
    let start = Session {
        error: Some("Failed to copy: nope".into()),
        ..Session::default()
    };
    let (session, _) = reduce(&start, Action::Generate, &generator());
    assert!(session.error.is_none());
    assert!(!session.output.is_empty());
}

#[test]
fn generate_failure_keeps_previous_output() {
    let start = Session {
        output: "previous snippet".into(),
        ..Session::default()
    };
    let (session, effect) = reduce(&start, Action::Generate, &BrokenSource);
    assert!(effect.is_none());
    assert_eq!(session.output, "previous snippet");
    let error = session.error.expect("error is set");
    assert!(error.starts_with("Error generating schema: "), "{error}");
}

#[test]
fn copy_without_output_is_noop() {
    let (session, effect) = reduce(&Session::default(), Action::Copy, &generator());
    assert!(effect.is_none());
    assert_eq!(session, Session::default());
}

#[test]
fn copy_requests_one_clipboard_write() {
    let gen = generator();
    let session = generated(&gen);
    let (_, effect) = reduce(&session, Action::Copy, &gen);
    assert_eq!(effect, Some(Effect::WriteClipboard(session.output.clone())));
}

#[test]
fn copy_failed_sets_error() {
    let (session, _) = reduce(
        &Session::default(),
        Action::CopyFailed("denied".into()),
        &generator(),
    );
    assert_eq!(session.error.as_deref(), Some("Failed to copy: denied"));
}

#[test]
fn run_generate_then_copy_writes_clipboard_once() {
    let gen = generator();
    let mut clipboard = MemoryClipboard::default();
    let session = run(
        Session::default(),
        [
            Action::EditInput(String::new()),
            Action::Generate,
            Action::Copy,
        ],
        &gen,
        &mut clipboard,
    );

    assert_eq!(clipboard.writes.len(), 1);
    assert_eq!(clipboard.writes[0], session.output);
    assert_eq!(session.notice.as_deref(), Some(COPIED_NOTICE));
    assert!(session.error.is_none());
}

#[test]
fn run_copy_failure_leaves_output_intact() {
    let gen = generator();
    let session = run(
        Session::default(),
        [Action::Generate, Action::Copy],
        &gen,
        &mut DetachedClipboard,
    );

    assert!(!session.output.is_empty());
    assert!(session.notice.is_none());
    let error = session.error.expect("copy error surfaced");
    assert!(error.starts_with("Failed to copy: "), "{error}");
}

#[test]
fn run_is_byte_identical_for_identical_input() {
    let gen = generator();
    let actions = || {
        [
            Action::EditInput(
                "name A Magasin B description C Votre D url https://a.example image".into(),
            ),
            Action::Generate,
        ]
    };
    let mut clipboard = MemoryClipboard::default();
    let first = run(Session::default(), actions(), &gen, &mut clipboard);
    let second = run(Session::default(), actions(), &gen, &mut clipboard);
    assert_eq!(first.output, second.output);
}

#[test]
fn present_writes_output_and_notice() {
    let session = Session {
        output: "snippet".into(),
        notice: Some(COPIED_NOTICE.into()),
        ..Session::default()
    };
    let mut out = Vec::new();
    let mut status = Vec::new();
    present(&session, &mut out, &mut status).unwrap();
    assert_eq!(out, b"snippet\n");
    assert_eq!(status, b"Copied to clipboard!\n");
}

#[test]
fn present_empty_session_writes_nothing() {
    let mut out = Vec::new();
    let mut status = Vec::new();
    present(&Session::default(), &mut out, &mut status).unwrap();
    assert!(out.is_empty());
    assert!(status.is_empty());
}

//! Command handlers for the CLI.

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};
use storeld_core::{FieldKey, FieldSet, Locale};

use crate::clipboard::Osc52Clipboard;
use crate::session::{self, Action, Generator, Session};

/// Read pasted text from `path`, or stdin when `path` is `None` or `-`.
pub(crate) fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) if p != Path::new("-") => fs::read_to_string(p)
            .with_context(|| format!("failed to read input from {}", p.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read input from stdin")?;
            Ok(buf)
        }
    }
}

/// Generate the snippet for the pasted input, optionally copying it.
///
/// # Errors
///
/// Returns an error if input or output cannot be accessed, or if the
/// session ends with a generation or clipboard error.
pub(crate) fn run_generate(
    generator: &Generator,
    input: Option<&Path>,
    output: Option<&Path>,
    copy: bool,
) -> anyhow::Result<()> {
    let text = read_input(input)?;

    let mut actions = vec![Action::EditInput(text), Action::Generate];
    if copy {
        actions.push(Action::Copy);
    }

    let stderr = io::stderr();
    let attached = stderr.is_terminal();
    let mut clipboard = Osc52Clipboard::new(stderr, attached);
    let session = session::run(Session::default(), actions, generator, &mut clipboard);

    tracing::info!(
        input_bytes = session.input.len(),
        output_bytes = session.output.len(),
        copied = session.notice.is_some(),
        "generate finished"
    );

    let mut status = io::stderr().lock();
    if let Some(path) = output {
        let mut file = fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        session::present(&session, &mut file, &mut status)
            .with_context(|| format!("failed to write {}", path.display()))?;
    } else {
        let mut stdout = io::stdout().lock();
        session::present(&session, &mut stdout, &mut status).context("failed to write output")?;
        stdout.flush().context("failed to flush output")?;
    }

    if let Some(error) = session.error {
        anyhow::bail!(error);
    }
    Ok(())
}

/// Field values as JSON: both locales per key, or only `locale`'s value.
pub(crate) fn fields_report(fields: &FieldSet, locale: Option<Locale>) -> anyhow::Result<Value> {
    let Some(locale) = locale else {
        return serde_json::to_value(fields).context("failed to encode fields");
    };
    let projected: Map<String, Value> = FieldKey::ALL
        .iter()
        .map(|&key| (key.as_str().to_string(), Value::from(fields.value(key, locale))))
        .collect();
    Ok(Value::Object(projected))
}

/// Print what the extractor recognised in the pasted input.
pub(crate) fn run_extract(
    generator: &Generator,
    input: Option<&Path>,
    locale: Option<Locale>,
) -> anyhow::Result<()> {
    let text = read_input(input)?;
    let extraction = generator.extract(&text)?;

    let matched: Vec<&str> = extraction.matched().iter().map(|k| k.as_str()).collect();
    tracing::info!(kind = extraction.kind(), ?matched, ?locale, "extract finished");

    let report = serde_json::json!({
        "kind": extraction.kind(),
        "matched": matched,
        "fields": fields_report(extraction.fields(), locale)?,
    });
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", serde_json::to_string_pretty(&report)?)?;
    Ok(())
}

/// Print the active store profile.
pub(crate) fn run_defaults(generator: &Generator) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(generator.profile()).context("failed to encode profile")?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(yaml.as_bytes())?;
    Ok(())
}

use storeld_core::{FieldSet, Locale, StoreProfile};

use crate::builder::build;
use crate::error::SchemaError;
use crate::types::StoreSchema;

const SCRIPT_OPEN: &str = r#"<script type="application/ld+json">"#;
const SCRIPT_CLOSE: &str = "</script>";

/// Wrap both schemas in the theme's Liquid locale conditional.
///
/// The tag text is consumed verbatim by the storefront and must not change.
///
/// # Errors
///
/// Returns [`SchemaError::Serialize`] if either schema fails to serialize.
pub fn render(en: &StoreSchema, fr: &StoreSchema) -> Result<String, SchemaError> {
    let en_json = to_pretty_json(en, Locale::En)?;
    let fr_json = to_pretty_json(fr, Locale::Fr)?;

    Ok(format!(
        "{{% if request.locale.iso_code == 'en' %}}\n\
         {SCRIPT_OPEN}\n{en_json}\n{SCRIPT_CLOSE}\n\
         {{% else %}}\n\
         {SCRIPT_OPEN}\n{fr_json}\n{SCRIPT_CLOSE}\n\
         {{% endif %}}"
    ))
}

/// Build both locale schemas from `fields` and render the template.
///
/// # Errors
///
/// Returns [`SchemaError::Serialize`] if either schema fails to serialize.
pub fn generate(profile: &StoreProfile, fields: &FieldSet) -> Result<String, SchemaError> {
    let en = build(profile, fields, Locale::En);
    let fr = build(profile, fields, Locale::Fr);
    render(&en, &fr)
}

fn to_pretty_json(schema: &StoreSchema, locale: Locale) -> Result<String, SchemaError> {
    serde_json::to_string_pretty(schema).map_err(|source| SchemaError::Serialize {
        locale: locale.as_str(),
        source,
    })
}

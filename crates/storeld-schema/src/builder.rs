use std::sync::LazyLock;

use regex::Regex;
use storeld_core::{FieldKey, FieldSet, Locale, StoreProfile};

use crate::types::{
    DayOfWeek, GeoCoordinates, OpeningHoursSpecification, PostalAddress, StoreSchema,
    SCHEMA_CONTEXT,
};

/// Longest leading decimal literal, after leading whitespace.
const FLOAT_PREFIX: &str =
    r"^[\s\x{feff}]*([+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?))";

static FLOAT_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(FLOAT_PREFIX).expect("valid float prefix regex"));

/// Build one locale's [`StoreSchema`] from `fields`.
///
/// Total and deterministic: every key is populated for any field set,
/// including one made of empty strings. `image` and `sameAs` come from the
/// profile and are identical for both locales.
///
/// The weekend entry takes its hours from `openingHours_Sa` only;
/// `openingHours_Su` is carried in the field set but not published.
#[must_use]
pub fn build(profile: &StoreProfile, fields: &FieldSet, locale: Locale) -> StoreSchema {
    let value = |key: FieldKey| fields.value(key, locale).to_string();

    let (weekday_opens, weekday_closes) =
        split_hours(fields.value(FieldKey::OpeningHoursWeekdays, locale));
    let (weekend_opens, weekend_closes) =
        split_hours(fields.value(FieldKey::OpeningHoursSaturday, locale));

    StoreSchema {
        context: SCHEMA_CONTEXT,
        schema_type: "Store",
        name: value(FieldKey::Name),
        description: value(FieldKey::Description),
        url: value(FieldKey::Url),
        image: profile.image.clone(),
        telephone: value(FieldKey::Telephone),
        address: PostalAddress {
            schema_type: "PostalAddress",
            street_address: value(FieldKey::StreetAddress),
            address_locality: value(FieldKey::AddressLocality),
            address_region: value(FieldKey::AddressRegion),
            postal_code: value(FieldKey::PostalCode),
            address_country: value(FieldKey::AddressCountry),
        },
        geo: GeoCoordinates {
            schema_type: "GeoCoordinates",
            latitude: coordinate(fields, FieldKey::Latitude, locale),
            longitude: coordinate(fields, FieldKey::Longitude, locale),
        },
        opening_hours_specification: vec![
            OpeningHoursSpecification {
                schema_type: "OpeningHoursSpecification",
                day_of_week: DayOfWeek::WEEKDAYS.to_vec(),
                opens: weekday_opens.to_string(),
                closes: weekday_closes.to_string(),
            },
            OpeningHoursSpecification {
                schema_type: "OpeningHoursSpecification",
                day_of_week: DayOfWeek::WEEKEND.to_vec(),
                opens: weekend_opens.to_string(),
                closes: weekend_closes.to_string(),
            },
        ],
        same_as: profile.same_as.clone(),
    }
}

/// Split an `HH:MM-HH:MM` range once on `-`.
///
/// Without a separator the whole value is the opening time and the
/// closing time is empty.
#[must_use]
pub fn split_hours(range: &str) -> (&str, &str) {
    range.split_once('-').unwrap_or((range, ""))
}

/// Parse the longest numeric prefix of `raw`, the way sheet exports are
/// read by browsers (`"45.48 N"` is `45.48`). Returns `NaN` when there is
/// no numeric prefix.
#[must_use]
pub fn parse_float(raw: &str) -> f64 {
    FLOAT_PREFIX_RE
        .captures(raw)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

fn coordinate(fields: &FieldSet, key: FieldKey, locale: Locale) -> f64 {
    let raw = fields.value(key, locale);
    let parsed = parse_float(raw);
    if !parsed.is_finite() {
        tracing::warn!(
            field = %key,
            %locale,
            raw,
            "coordinate is not a finite number, emitting null"
        );
    }
    parsed
}

#[cfg(test)]
#[path = "builder_test.rs"]
mod tests;

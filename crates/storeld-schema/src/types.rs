//! schema.org types emitted in the JSON-LD block.
//!
//! serde serializes struct fields in declaration order; keep declarations
//! in the key order of the published markup.

use serde::Serialize;

pub const SCHEMA_CONTEXT: &str = "http://schema.org";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StoreSchema {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub url: String,
    pub image: String,
    pub telephone: String,
    pub address: PostalAddress,
    pub geo: GeoCoordinates,
    #[serde(rename = "openingHoursSpecification")]
    pub opening_hours_specification: Vec<OpeningHoursSpecification>,
    #[serde(rename = "sameAs")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "streetAddress")]
    pub street_address: String,
    #[serde(rename = "addressLocality")]
    pub address_locality: String,
    #[serde(rename = "addressRegion")]
    pub address_region: String,
    #[serde(rename = "postalCode")]
    pub postal_code: String,
    #[serde(rename = "addressCountry")]
    pub address_country: String,
}

/// Non-finite coordinates serialize as JSON `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoCoordinates {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpeningHoursSpecification {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "dayOfWeek")]
    pub day_of_week: Vec<DayOfWeek>,
    pub opens: String,
    pub closes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const WEEKDAYS: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    /// Weekend entry order as published on the storefront.
    pub const WEEKEND: [DayOfWeek; 2] = [DayOfWeek::Sunday, DayOfWeek::Saturday];
}

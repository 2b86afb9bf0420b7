//! The field set a store template is generated from.
//!
//! Every attribute carries one value per supported [`Locale`]. A
//! [`FieldSet`] stores each [`FieldKey`] as a named struct field, so a
//! value can never be missing; extraction only ever overwrites pairs.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Output locales. The generated template carries exactly these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Fr,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Fr];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Fr => "fr",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "fr" => Ok(Locale::Fr),
            _ => Err(ConfigError::UnknownLocale(s.to_string())),
        }
    }
}

/// An English/French string pair. Empty strings are valid values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocalizedValue {
    pub en: String,
    pub fr: String,
}

impl LocalizedValue {
    pub fn new(en: impl Into<String>, fr: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            fr: fr.into(),
        }
    }

    /// Same value for both locales.
    pub fn uniform(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            en: value.clone(),
            fr: value,
        }
    }

    #[must_use]
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Fr => &self.fr,
        }
    }
}

/// Names of every attribute in a [`FieldSet`].
///
/// The serialized names are the literal keys of the pasted-sheet format
/// (`streetAddress`, `openingHours_Mo-Fr`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "description")]
    Description,
    #[serde(rename = "url")]
    Url,
    #[serde(rename = "telephone")]
    Telephone,
    #[serde(rename = "streetAddress")]
    StreetAddress,
    #[serde(rename = "addressLocality")]
    AddressLocality,
    #[serde(rename = "addressRegion")]
    AddressRegion,
    #[serde(rename = "postalCode")]
    PostalCode,
    #[serde(rename = "addressCountry")]
    AddressCountry,
    #[serde(rename = "latitude")]
    Latitude,
    #[serde(rename = "longitude")]
    Longitude,
    #[serde(rename = "openingHours_Mo-Fr")]
    OpeningHoursWeekdays,
    #[serde(rename = "openingHours_Sa")]
    OpeningHoursSaturday,
    #[serde(rename = "openingHours_Su")]
    OpeningHoursSunday,
}

impl FieldKey {
    pub const ALL: [FieldKey; 14] = [
        FieldKey::Name,
        FieldKey::Description,
        FieldKey::Url,
        FieldKey::Telephone,
        FieldKey::StreetAddress,
        FieldKey::AddressLocality,
        FieldKey::AddressRegion,
        FieldKey::PostalCode,
        FieldKey::AddressCountry,
        FieldKey::Latitude,
        FieldKey::Longitude,
        FieldKey::OpeningHoursWeekdays,
        FieldKey::OpeningHoursSaturday,
        FieldKey::OpeningHoursSunday,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Name => "name",
            FieldKey::Description => "description",
            FieldKey::Url => "url",
            FieldKey::Telephone => "telephone",
            FieldKey::StreetAddress => "streetAddress",
            FieldKey::AddressLocality => "addressLocality",
            FieldKey::AddressRegion => "addressRegion",
            FieldKey::PostalCode => "postalCode",
            FieldKey::AddressCountry => "addressCountry",
            FieldKey::Latitude => "latitude",
            FieldKey::Longitude => "longitude",
            FieldKey::OpeningHoursWeekdays => "openingHours_Mo-Fr",
            FieldKey::OpeningHoursSaturday => "openingHours_Sa",
            FieldKey::OpeningHoursSunday => "openingHours_Su",
        }
    }
}

impl std::fmt::Display for FieldKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// All store attributes, each as a [`LocalizedValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldSet {
    pub name: LocalizedValue,
    pub description: LocalizedValue,
    pub url: LocalizedValue,
    pub telephone: LocalizedValue,
    #[serde(rename = "streetAddress")]
    pub street_address: LocalizedValue,
    #[serde(rename = "addressLocality")]
    pub address_locality: LocalizedValue,
    #[serde(rename = "addressRegion")]
    pub address_region: LocalizedValue,
    #[serde(rename = "postalCode")]
    pub postal_code: LocalizedValue,
    #[serde(rename = "addressCountry")]
    pub address_country: LocalizedValue,
    pub latitude: LocalizedValue,
    pub longitude: LocalizedValue,
    #[serde(rename = "openingHours_Mo-Fr")]
    pub opening_hours_weekdays: LocalizedValue,
    #[serde(rename = "openingHours_Sa")]
    pub opening_hours_saturday: LocalizedValue,
    #[serde(rename = "openingHours_Su")]
    pub opening_hours_sunday: LocalizedValue,
}

impl FieldSet {
    #[must_use]
    pub fn get(&self, key: FieldKey) -> &LocalizedValue {
        match key {
            FieldKey::Name => &self.name,
            FieldKey::Description => &self.description,
            FieldKey::Url => &self.url,
            FieldKey::Telephone => &self.telephone,
            FieldKey::StreetAddress => &self.street_address,
            FieldKey::AddressLocality => &self.address_locality,
            FieldKey::AddressRegion => &self.address_region,
            FieldKey::PostalCode => &self.postal_code,
            FieldKey::AddressCountry => &self.address_country,
            FieldKey::Latitude => &self.latitude,
            FieldKey::Longitude => &self.longitude,
            FieldKey::OpeningHoursWeekdays => &self.opening_hours_weekdays,
            FieldKey::OpeningHoursSaturday => &self.opening_hours_saturday,
            FieldKey::OpeningHoursSunday => &self.opening_hours_sunday,
        }
    }

    pub fn get_mut(&mut self, key: FieldKey) -> &mut LocalizedValue {
        match key {
            FieldKey::Name => &mut self.name,
            FieldKey::Description => &mut self.description,
            FieldKey::Url => &mut self.url,
            FieldKey::Telephone => &mut self.telephone,
            FieldKey::StreetAddress => &mut self.street_address,
            FieldKey::AddressLocality => &mut self.address_locality,
            FieldKey::AddressRegion => &mut self.address_region,
            FieldKey::PostalCode => &mut self.postal_code,
            FieldKey::AddressCountry => &mut self.address_country,
            FieldKey::Latitude => &mut self.latitude,
            FieldKey::Longitude => &mut self.longitude,
            FieldKey::OpeningHoursWeekdays => &mut self.opening_hours_weekdays,
            FieldKey::OpeningHoursSaturday => &mut self.opening_hours_saturday,
            FieldKey::OpeningHoursSunday => &mut self.opening_hours_sunday,
        }
    }

    /// One locale's projection of a single attribute.
    #[must_use]
    pub fn value(&self, key: FieldKey, locale: Locale) -> &str {
        self.get(key).get(locale)
    }

    /// Replace the pair stored under `key`.
    pub fn set(&mut self, key: FieldKey, value: LocalizedValue) {
        *self.get_mut(key) = value;
    }
}

#[cfg(test)]
#[path = "fields_test.rs"]
mod tests;

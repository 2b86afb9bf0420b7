//! schema.org `Store` JSON-LD generation.
//!
//! [`build`] projects one locale of a [`storeld_core::FieldSet`] into a
//! [`StoreSchema`]; [`render`] wraps the English and French schemas in the
//! Liquid locale conditional the storefront theme expects.

pub mod builder;
pub mod error;
pub mod render;
pub mod types;

pub use builder::{build, parse_float, split_hours};
pub use error::SchemaError;
pub use render::{generate, render};
pub use types::{DayOfWeek, GeoCoordinates, OpeningHoursSpecification, PostalAddress, StoreSchema};

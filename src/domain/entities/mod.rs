//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, mapped 1:1
//! onto the tables in `migrations/0001_initial_schema.sql`.
//!
//! # Entity Types
//!
//! - [`UrlRecord`] - A long URL and its shortcode
//! - [`ClickRecord`] - The resolution counter of a URL record
//!
//! # Design Pattern
//!
//! Creation inputs use separate structs ([`NewUrlRecord`]) so that
//! store-assigned fields (`id`, timestamps) cannot be forged by callers.

pub mod click_record;
pub mod url_record;

pub use click_record::ClickRecord;
pub use url_record::{NewUrlRecord, UrlRecord};

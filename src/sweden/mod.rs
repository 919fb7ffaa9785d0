//! Swedish identifiers.
//!
//! The birth century of a personnummer is inferred from the current date,
//! so a decoded birth year can change as time passes. Use
//! [`SwedishPersonalId::validate_at`] to pin the reference date.

mod personal_id;

pub use personal_id::{SwedishPersonalId, SwedishPersonalIdType};

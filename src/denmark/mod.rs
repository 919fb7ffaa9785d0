//! Danish identifiers.
//!
//! # Example
//!
//! ```rust
//! use national_id::NationalId;
//! use national_id::denmark::DanishPersonalId;
//!
//! let cpr = DanishPersonalId::validate("211062-5629");
//! assert!(cpr.is_valid);
//! ```

mod personal_id;

pub use personal_id::{DanishPersonalId, DanishPersonalIdType};

//! # national-id
//!
//! Validation and decoding of Nordic and UK identification numbers:
//! personal IDs, company IDs, bank account numbers, KID payment references,
//! National Insurance numbers and NHS/CHI numbers.
//!
//! Every decoder is a pure function of its input string. A result either
//! carries `is_valid == true` together with the metadata the number encodes
//! (birth date, sex, sub-type, region, VAT flag), or it is the type's
//! `Default` value with every derived field unknown.
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use national_id::*;
//! use national_id::norway::{NorwegianPersonalId, NorwegianPersonalIdType};
//!
//! let id = NorwegianPersonalId::validate("58031320478");
//! assert!(id.is_valid);
//! assert_eq!(id.id_type, NorwegianPersonalIdType::DNumber);
//! assert_eq!(id.birth_date, NaiveDate::from_ymd_opt(1913, 3, 18));
//!
//! // The reason is available through `parse`.
//! assert_eq!(NorwegianPersonalId::parse("58031320479"), Err(Rejection::ChecksumMismatch));
//!
//! // Or dispatch by scheme at runtime.
//! assert!(Scheme::NhsNumber.validate("401 023 2137").is_valid());
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Checksum primitives, century resolution, [`NationalId`] |
//! | `denmark` | CPR-nummer |
//! | `finland` | Henkilötunnus |
//! | `norway` | Fødselsnummer, organisasjonsnummer, kontonummer, KID |
//! | `sweden` | Personnummer, samordningsnummer, organisationsnummer |
//! | `uk` | National Insurance number, NHS/CHI number |
//! | `all` (default) | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "denmark")]
pub mod denmark;

#[cfg(feature = "finland")]
pub mod finland;

#[cfg(feature = "norway")]
pub mod norway;

#[cfg(feature = "sweden")]
pub mod sweden;

#[cfg(feature = "uk")]
pub mod uk;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

//! Norwegian identifiers: fødselsnummer and its D/H/FH variants,
//! organisasjonsnummer, bank account numbers and KID payment references.
//!
//! # Example
//!
//! ```rust
//! use national_id::NationalId;
//! use national_id::norway::*;
//!
//! assert!(NorwegianCompanyId::validate("NO 974 760 673 MVA").vat_registered);
//! assert!(NorwegianBankAccountNumber::validate("1234.10.56789").is_valid);
//!
//! let kid = NorwegianCustomerId::validate("123456785");
//! assert_eq!(kid.routine, CustomerIdRoutine::Modulus11);
//! ```

mod bank_account;
mod company_id;
mod customer_id;
mod personal_id;

pub use bank_account::NorwegianBankAccountNumber;
pub use company_id::NorwegianCompanyId;
pub use customer_id::{CustomerIdRoutine, NorwegianCustomerId};
pub use personal_id::{NorwegianPersonalId, NorwegianPersonalIdType};

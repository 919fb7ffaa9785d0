//! United Kingdom identifiers: National Insurance numbers and NHS/CHI
//! health-service numbers.

mod nhs;
mod nino;

pub use nhs::{NhsLocation, NhsNumber};
pub use nino::NationalInsuranceNumber;

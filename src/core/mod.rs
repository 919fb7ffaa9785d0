//! Shared building blocks: checksum primitives, century resolution, the
//! [`NationalId`] contract and the closed [`Scheme`] dispatch.

pub mod checksum;
pub mod date;
#[cfg(any(
    feature = "denmark",
    feature = "finland",
    feature = "norway",
    feature = "sweden",
    feature = "uk"
))]
pub(crate) mod digits;
mod error;
mod id;
#[cfg(any(
    feature = "denmark",
    feature = "finland",
    feature = "norway",
    feature = "sweden",
    feature = "uk"
))]
mod scheme;
mod types;

pub use error::*;
#[cfg(any(
    feature = "denmark",
    feature = "finland",
    feature = "norway",
    feature = "sweden",
    feature = "uk"
))]
pub(crate) use id::non_empty;
pub use id::NationalId;
#[cfg(any(
    feature = "denmark",
    feature = "finland",
    feature = "norway",
    feature = "sweden",
    feature = "uk"
))]
pub use scheme::*;
pub use types::*;

//! Finnish identifiers.

mod personal_id;

pub use personal_id::FinnishPersonalId;

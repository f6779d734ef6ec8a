//! Platform definitions shared by the rawsockets layer.
//!
//! `constants` holds the numeric socket and protocol values for each
//! supported platform family, together with the documented fallbacks used
//! when a platform's headers do not define a value. `data` holds the plain
//! records handed back to the host: protocol records, constant entries and
//! the seconds/microseconds timeout split.

pub mod constants;
pub mod data;

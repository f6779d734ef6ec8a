//! Symbolic socket constant registry.
//!
//! Maps names such as `"AF_INET"` or `"SO_RCVTIMEO"` to this platform's
//! numeric value. The table is built on first use and is read-only from then
//! on; `lazy_static` makes concurrent first lookups wait for the single
//! population instead of racing it.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use lazy_static::lazy_static;
use sysdefs::constants::{FALLBACK_IPV6_MAXHLIM, FALLBACK_IPV6_VERSION};
use sysdefs::data::ConstantEntry;

use crate::errors::SockError;
use crate::platform::{Native, SocketBackend};

/// What to register when the platform has no native value for a name.
enum Fallback {
    /// Reuse the value of another constant.
    Alias(&'static str),
    Literal(i32),
}

// Applied in order, so a later alias may target an earlier fallback.
const FALLBACKS: [(&str, Fallback); 5] = [
    ("IPPROTO_IPV4", Fallback::Alias("IPPROTO_IPIP")),
    ("IPPROTO_IPIP", Fallback::Alias("IPPROTO_IPV4")),
    ("IPV6_HDRINCL", Fallback::Alias("IP_HDRINCL")),
    ("IPV6_MAXHLIM", Fallback::Literal(FALLBACK_IPV6_MAXHLIM)),
    ("IPV6_VERSION", Fallback::Literal(FALLBACK_IPV6_VERSION)),
];

// Option levels are protocol numbers.
const LEVEL_ALIASES: [(&str, &str); 5] = [
    ("SOL_IP", "IPPROTO_IP"),
    ("SOL_IPV4", "IPPROTO_IPV4"),
    ("SOL_IPV6", "IPPROTO_IPV6"),
    ("SOL_TCP", "IPPROTO_TCP"),
    ("SOL_UDP", "IPPROTO_UDP"),
];

static POPULATIONS: AtomicUsize = AtomicUsize::new(0);

lazy_static! {
    static ref CONSTANT_TABLE: HashMap<&'static str, i32> = populate();
}

fn populate() -> HashMap<&'static str, i32> {
    POPULATIONS.fetch_add(1, Ordering::SeqCst);

    let mut table: HashMap<&'static str, i32> = Native::constant_table().into_iter().collect();

    for (name, fallback) in FALLBACKS.iter() {
        if table.contains_key(name) {
            continue;
        }
        let value = match fallback {
            Fallback::Alias(target) => table.get(target).copied(),
            Fallback::Literal(value) => Some(*value),
        };
        if let Some(value) = value {
            log::debug!("{} not defined natively, using fallback {}", name, value);
            table.insert(*name, value);
        }
    }

    for (alias, target) in LEVEL_ALIASES.iter() {
        if let Some(&value) = table.get(target) {
            table.insert(*alias, value);
        }
    }

    log::debug!("populated {} socket constants", table.len());
    table
}

/// Resolves a constant name to its native value.
pub fn resolve(name: &str) -> Result<i32, SockError> {
    CONSTANT_TABLE
        .get(name)
        .copied()
        .ok_or_else(|| SockError::UnknownConstant {
            name: name.to_string(),
        })
}

pub fn is_defined(name: &str) -> bool {
    CONSTANT_TABLE.contains_key(name)
}

/// Every registered constant, sorted by name.
pub fn entries() -> Vec<ConstantEntry> {
    let mut entries: Vec<ConstantEntry> = CONSTANT_TABLE
        .iter()
        .map(|(name, value)| ConstantEntry {
            name: name.to_string(),
            value: *value,
        })
        .collect();
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    entries
}

/// How many times the table has been built in this process.
#[doc(hidden)]
pub fn population_count() -> usize {
    POPULATIONS.load(Ordering::SeqCst)
}

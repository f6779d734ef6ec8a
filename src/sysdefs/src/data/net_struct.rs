use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of alias slots every protocol record carries.
///
/// Slots the protocol database does not fill are empty strings. Aliases past
/// this count are still kept, so a record's alias list is never shorter than
/// this and never truncated.
pub const PROTOCOL_ALIAS_SLOTS: usize = 1;

const MILLIS_PER_SECOND: i64 = 1000;
const MICROS_PER_MILLI: i64 = 1000;

/// A protocol-database entry, e.g. `tcp` / `["TCP"]` / 6.
///
/// Records are built fresh for every lookup and hold no reference to the
/// database entry they were copied from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    pub name: String,
    pub aliases: Vec<String>,
    pub number: i32,
}

impl ProtocolRecord {
    /// Builds a record, padding `aliases` with empty strings up to
    /// [`PROTOCOL_ALIAS_SLOTS`].
    ///
    /// This is not a fixed one-slot native layout: aliases past the slot
    /// count are kept, so the list can be longer than
    /// [`PROTOCOL_ALIAS_SLOTS`] but never shorter.
    pub fn new(name: String, mut aliases: Vec<String>, number: i32) -> Self {
        while aliases.len() < PROTOCOL_ALIAS_SLOTS {
            aliases.push(String::new());
        }
        ProtocolRecord {
            name,
            aliases,
            number,
        }
    }
}

impl fmt::Display for ProtocolRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ name: \"{}\", aliases: {:?}, protocolNumber: {} }}",
            self.name, self.aliases, self.number
        )
    }
}

/// A resolved symbolic constant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstantEntry {
    pub name: String,
    pub value: i32,
}

/// A timeout split into whole seconds and a microsecond remainder, the
/// shape of a POSIX `struct timeval`.
///
/// Milliseconds are the canonical unit; this type only exists at the native
/// boundary. Converting back drops any sub-millisecond remainder and
/// saturates at the `i32` range, since the OS may hold timeouts longer than
/// `i32::MAX` milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeoutValue {
    seconds: i64,
    microseconds: i64,
}

impl TimeoutValue {
    pub fn from_millis(milliseconds: i32) -> Self {
        let milliseconds = milliseconds as i64;
        TimeoutValue {
            seconds: milliseconds / MILLIS_PER_SECOND,
            microseconds: (milliseconds % MILLIS_PER_SECOND) * MICROS_PER_MILLI,
        }
    }

    /// Rebuilds a value from a native seconds/microseconds pair.
    pub fn from_parts(seconds: i64, microseconds: i64) -> Self {
        TimeoutValue {
            seconds,
            microseconds,
        }
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn microseconds(&self) -> i64 {
        self.microseconds
    }

    /// Whole milliseconds, clamped to `i32::MIN..=i32::MAX`.
    pub fn as_millis(&self) -> i32 {
        let millis = self
            .seconds
            .saturating_mul(MILLIS_PER_SECOND)
            .saturating_add(self.microseconds / MICROS_PER_MILLI);
        millis.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    pub fn is_zero(&self) -> bool {
        self.seconds == 0 && self.microseconds == 0
    }
}

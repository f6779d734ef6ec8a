//! System protocol database lookups.
//!
//! The database lookups return pointers into libc (or Winsock) static
//! storage, and enumeration advances a single process-wide cursor. Every
//! access in this module holds `PROTOCOL_DB` for its full duration, so an
//! enumeration never interleaves with another enumeration or lookup.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;

use lazy_static::lazy_static;
use parking_lot::Mutex;
use sysdefs::data::ProtocolRecord;

use crate::platform::{Native, SocketBackend};

lazy_static! {
    static ref PROTOCOL_DB: Mutex<()> = Mutex::new(());
}

/// Looks a protocol up by name, e.g. `"tcp"`.
///
/// Returns `None` when the database has no such entry.
pub fn by_name(name: &str) -> Option<ProtocolRecord> {
    // A name with an interior NUL cannot be in the database.
    let name = CString::new(name).ok()?;
    let _guard = PROTOCOL_DB.lock();
    Native::protocol_by_name(&name)
}

/// Looks a protocol up by number, e.g. `6`.
pub fn by_number(number: i32) -> Option<ProtocolRecord> {
    let _guard = PROTOCOL_DB.lock();
    Native::protocol_by_number(number)
}

/// Every protocol the system knows, in database order.
pub fn list_all() -> Vec<ProtocolRecord> {
    let _guard = PROTOCOL_DB.lock();
    let records = Native::protocol_entries();
    log::trace!("protocol database returned {} entries", records.len());
    records
}

/// Copies a native protocol entry into an owned record.
///
/// `aliases` is a NULL-terminated array (it may itself be NULL). Alias slots
/// the entry leaves unfilled come back as empty strings.
///
/// # Safety
/// `name` must be NULL or a valid C string, and `aliases` NULL or a valid
/// NULL-terminated array of C strings, both live for the duration of the
/// call.
pub(crate) unsafe fn record_from_raw(
    name: *const c_char,
    aliases: *const *const c_char,
    number: i32,
) -> Option<ProtocolRecord> {
    if name.is_null() {
        return None;
    }
    let name = CStr::from_ptr(name).to_string_lossy().into_owned();

    let mut alias_list = Vec::new();
    if !aliases.is_null() {
        let mut cursor = aliases;
        while !(*cursor).is_null() {
            alias_list.push(CStr::from_ptr(*cursor).to_string_lossy().into_owned());
            cursor = cursor.add(1);
        }
    }

    Some(ProtocolRecord::new(name, alias_list, number))
}

//! Ship log journaling: the storage capability, an in-memory store, and the
//! Lua binding mission scripts use to write to it.

pub mod script;
pub mod store;

pub use store::{LogEntry, LogSet, ShipLog};

use crate::consts::{SCRIPT_STATUS_FAILED, SCRIPT_STATUS_OK};
use crate::error::Result;

/// Numeric handle of a log, unique within one store.
pub type LogId = u32;

/// What mission scripts may do with ship logs.
pub trait LogStore {
    /// Create a log. `id` is `None` for unnamed logs; `max_len == 0` means
    /// unbounded. With `overwrite`, logs of the same name and kind are
    /// removed first.
    fn create_log(
        &mut self,
        id: Option<&str>,
        name: &str,
        kind: &str,
        overwrite: bool,
        max_len: usize,
    ) -> Result<LogId>;

    /// Append a message to the log registered under `id`.
    fn append_log(&mut self, id: &str, message: &str) -> Result<()>;
}

/// Collapse a store result into the status code scripts see.
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => SCRIPT_STATUS_OK,
        Err(_) => SCRIPT_STATUS_FAILED,
    }
}

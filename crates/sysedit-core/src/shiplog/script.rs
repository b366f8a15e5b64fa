use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use mlua::{Lua, Value};
use tracing::info;

use super::{status_code, LogStore};
use crate::error::Result;

/// `createLog(idstr, name, kind, overwrite [, maxLen])`
type CreateLogArgs = (String, String, String, Value, Option<i64>);

/// Name of the global table scripts call into.
pub const SHIPLOG_TABLE: &str = "shiplog";

/// Install the `shiplog` table into `lua`:
///
/// ```lua
/// shiplog.createLog("idstring", "log name", "log type", overwrite [, maxLen])
/// shiplog.appendLog("idstring", "message")
/// ```
///
/// Both return `0` on success and `-1` on failure. Wrongly typed or missing
/// string arguments raise a Lua error.
pub fn register<S: LogStore + 'static>(lua: &Lua, store: Rc<RefCell<S>>) -> Result<()> {
    let table = lua.create_table()?;

    let create_store = Rc::clone(&store);
    let create_log = lua.create_function(move |_, args: CreateLogArgs| {
        let (idstr, name, kind, overwrite, max_len) = args;
        let id = (!idstr.is_empty()).then_some(idstr.as_str());
        let max_len = max_len.unwrap_or(0).max(0) as usize;
        let result = create_store.borrow_mut().create_log(
            id,
            &name,
            &kind,
            is_truthy(&overwrite),
            max_len,
        );
        Ok(status_code(&result))
    })?;
    table.set("createLog", create_log)?;

    let append_store = store;
    let append_log = lua.create_function(move |_, (idstr, message): (String, String)| {
        let result = append_store.borrow_mut().append_log(&idstr, &message);
        Ok(status_code(&result))
    })?;
    table.set("appendLog", append_log)?;

    lua.globals().set(SHIPLOG_TABLE, table)?;
    Ok(())
}

/// Run a mission script with the `shiplog` table bound to `store`.
pub fn run_script<S: LogStore + 'static>(
    store: Rc<RefCell<S>>,
    source: &str,
    chunk_name: &str,
) -> Result<()> {
    let lua = Lua::new();
    register(&lua, store)?;
    lua.load(source).set_name(chunk_name).exec()?;
    info!(chunk = chunk_name, "Mission script finished");
    Ok(())
}

pub fn run_script_file<S: LogStore + 'static>(store: Rc<RefCell<S>>, path: &Path) -> Result<()> {
    let source = std::fs::read_to_string(path)?;
    run_script(store, &source, &path.display().to_string())
}

fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Nil | Value::Boolean(false))
}

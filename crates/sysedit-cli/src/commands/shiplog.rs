use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Args;
use sysedit_core::shiplog::script::run_script;
use sysedit_core::shiplog::ShipLog;

use crate::summary::print_ship_logs;

#[derive(Args)]
pub struct ShiplogArgs {
    /// Lua mission script using the `shiplog` table
    pub script: PathBuf,

    /// Chunk name used in Lua error messages (defaults to the script path)
    #[arg(long)]
    pub script_name: Option<String>,
}

pub fn run(args: &ShiplogArgs) -> Result<()> {
    let store = Rc::new(RefCell::new(ShipLog::new()));
    let source = std::fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read {}", args.script.display()))?;
    let chunk_name = args
        .script_name
        .clone()
        .unwrap_or_else(|| args.script.display().to_string());

    run_script(Rc::clone(&store), &source, &chunk_name)
        .with_context(|| format!("Mission script {} failed", args.script.display()))?;

    print_ship_logs(&store.borrow());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    fn demo_script() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/mission.lua")
    }

    #[test]
    fn test_runs_demo_mission() {
        let args = ShiplogArgs {
            script: demo_script(),
            script_name: Some("demo".into()),
        };
        run(&args).unwrap();
    }

    #[test]
    fn test_script_failure_carries_context() {
        let mut f = tempfile::NamedTempFile::new().expect("create temp file");
        std::io::Write::write_all(&mut f, b"shiplog.appendLog({}, 'x')").expect("write script");

        let args = ShiplogArgs {
            script: f.path().to_path_buf(),
            script_name: None,
        };
        let err = run(&args).unwrap_err();
        assert!(err.to_string().starts_with("Mission script"));
        assert!(format!("{err:#}").contains("Script error"));
    }
}

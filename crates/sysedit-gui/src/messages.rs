use std::path::PathBuf;

use sysedit_core::config::EditorConfig;

/// Results sent back to the UI thread from file-dialog threads.
pub enum AppMessage {
    /// A config file was picked and parsed.
    ConfigImported { config: EditorConfig },

    /// A mission script was picked; it runs on the UI thread.
    MissionScriptPicked { path: PathBuf },

    /// Free-form message for the status log.
    Log { message: String },
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SyseditError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown ship log: {0}")]
    UnknownLog(String),

    #[error("Ship log name must not be empty")]
    EmptyLogName,

    #[error("Invalid editor config: {0}")]
    InvalidConfig(String),

    /// Lua errors are flattened to text; `mlua::Error` is not `Send`.
    #[error("Script error: {0}")]
    Script(String),
}

impl From<mlua::Error> for SyseditError {
    fn from(e: mlua::Error) -> Self {
        Self::Script(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SyseditError>;

use crate::target::ProcessId;

/// Failure reported by a host debugging primitive.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    /// Host refused the operation until it runs with elevated privileges.
    #[error("elevation required: {0}")]
    ElevationRequired(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // --------------------------------- generic errors --------------------------------------------
    #[error(transparent)]
    IO(#[from] std::io::Error),

    // --------------------------------- configuration errors --------------------------------------
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    // --------------------------------- process introspection errors ------------------------------
    #[error("unable to resolve target for process {name} ({pid}): {source:#}")]
    Resolve {
        pid: ProcessId,
        name: String,
        source: anyhow::Error,
    },

    // --------------------------------- attach errors ---------------------------------------------
    #[error("attach to process {process} based on target {target} requires elevation")]
    ElevationRequired { process: String, target: String },
}

impl Error {
    /// Return a hint to a caller - keep the hosting session alive after error or stop it.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::IO(_) => false,
            Error::Config(_) => false,
            Error::Resolve { .. } => false,
            Error::ElevationRequired { .. } => false,
        }
    }

    /// True if caller should prompt a user for elevated permissions and retry.
    pub fn is_elevation_required(&self) -> bool {
        matches!(self, Error::ElevationRequired { .. })
    }
}

#[macro_export]
macro_rules! _error {
    ($log_fn: path, $res: expr) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "reattach", "{:#}", e);
                None
            }
        }
    };
    ($log_fn: path, $res: expr, $msg: tt) => {
        match $res {
            Ok(value) => Some(value),
            Err(e) => {
                $log_fn!(target: "reattach", concat!($msg, " {:#}"), e);
                None
            }
        }
    };
}

/// Transforms `Result` into `Option` and put error into debug logs if it occurs.
#[macro_export]
macro_rules! muted_error {
    ($res: expr) => {
        $crate::_error!(log::debug, $res)
    };
    ($res: expr, $msg: tt) => {
        $crate::_error!(log::debug, $res, $msg)
    };
}

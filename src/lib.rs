//! Re-attach a debugger to processes after they restart.
//!
//! [`ReAttachDebugger`] observes debug events of a hosting environment and keeps a history
//! of processes a debugger was attached to. Later, a recorded [`Target`] may be replayed:
//! a live process with the same executable, owner and machine is found (it may have
//! a new pid) and debugger attaches to it again.

pub mod config;
pub mod debugger;
pub mod engine;
pub mod error;
pub mod history;
pub mod host;
mod log;
pub mod matcher;
pub mod reattach;
pub mod router;
pub mod session;
pub mod target;

pub use config::Config;
pub use debugger::{DebuggerEvents, ReAttachDebugger};
pub use engine::{Engine, EngineCatalog, EngineId};
pub use error::{Error, HostError};
pub use history::{History, TargetHistory};
pub use host::{
    DebugHost, DebugProcess, LogReporter, ProcessInfo, Reporter, ServerInfo, Services, UiNotifier,
};
pub use reattach::ReAttacher;
pub use router::{DebugEvent, EventRouter};
pub use session::{DebugMode, SessionState};
pub use target::{ProcessId, Target, TargetRef};

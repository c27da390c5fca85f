//! Contracts of a debugging host environment.
//! Host enumerates processes, attaches to them, delivers debug events and
//! owns user-facing services (reporting, history storage, UI).

use crate::engine::{Engine, EngineId};
use crate::error::HostError;
use crate::history::History;
use crate::target::ProcessId;
use std::fmt::Arguments;
use std::rc::Rc;

/// Live process as seen in a host process list.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessInfo {
    pub pid: ProcessId,
    /// Short process name.
    pub name: String,
    /// Full path to process executable.
    pub path: String,
    /// Owning user, empty if it can't be queried (exclusive mode, remote processes).
    pub user_name: String,
}

impl ProcessInfo {
    pub fn new(
        pid: ProcessId,
        name: impl Into<String>,
        path: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            pid,
            name: name.into(),
            path: path.into(),
            user_name: user_name.into(),
        }
    }
}

/// Debug server a process is running on.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerInfo {
    pub friendly_name: String,
    pub is_local: bool,
}

/// A process handle delivered together with debug events.
pub trait DebugProcess {
    fn pid(&self) -> ProcessId;

    fn name(&self) -> String;

    /// Return path to process executable.
    fn file_name(&self) -> anyhow::Result<String>;

    /// Return a server process running on, `None` if host can't tell it.
    fn server(&self) -> Option<ServerInfo>;

    /// Return engines process debugging is restricted to, `None` if there is no filter.
    fn engine_filter(&self) -> Option<Vec<EngineId>>;
}

/// Debugging host primitives.
pub trait DebugHost {
    /// Return names of all available transports.
    fn transports(&self) -> anyhow::Result<Vec<String>>;

    /// Return debugging engines available through transport.
    fn transport_engines(&self, transport: &str) -> anyhow::Result<Vec<Engine>>;

    /// Return processes running on a local machine.
    fn local_processes(&self) -> anyhow::Result<Vec<ProcessInfo>>;

    /// Return processes running on a remote server.
    ///
    /// # Arguments
    ///
    /// * `transport`: transport name
    /// * `server`: remote server name
    fn remote_processes(&self, transport: &str, server: &str) -> anyhow::Result<Vec<ProcessInfo>>;

    /// Attach to process with default engine selection.
    fn attach(&self, process: &ProcessInfo) -> Result<(), HostError>;

    /// Attach to process with specific engines.
    ///
    /// # Arguments
    ///
    /// * `process`: process to attach
    /// * `engines`: engine names
    fn attach_with_engines(&self, process: &ProcessInfo, engines: &[String])
        -> Result<(), HostError>;
}

/// User-visible reporting sink, never fails.
pub trait Reporter {
    fn report_trace(&self, msg: Arguments<'_>);
    fn report_warning(&self, msg: Arguments<'_>);
    fn report_error(&self, msg: Arguments<'_>);
}

/// Signals that a rendered target list may be stale.
pub trait UiNotifier {
    fn update(&self);
}

/// Reporter that writes into `log` facade.
#[derive(Default, Clone, Copy)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report_trace(&self, msg: Arguments<'_>) {
        log::trace!(target: "reattach", "{msg}");
    }

    fn report_warning(&self, msg: Arguments<'_>) {
        log::warn!(target: "reattach", "{msg}");
    }

    fn report_error(&self, msg: Arguments<'_>) {
        log::error!(target: "reattach", "{msg}");
    }
}

/// Services provided by a host package: reporting, target history and UI.
#[derive(Clone)]
pub struct Services {
    pub reporter: Rc<dyn Reporter>,
    pub history: Rc<dyn History>,
    pub ui: Rc<dyn UiNotifier>,
}

impl Services {
    pub fn new(
        reporter: Rc<dyn Reporter>,
        history: Rc<dyn History>,
        ui: Rc<dyn UiNotifier>,
    ) -> Self {
        Self {
            reporter,
            history,
            ui,
        }
    }
}

#[cfg(test)]
pub(crate) use fake::RecordingReporter;

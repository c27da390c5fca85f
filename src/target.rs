use crate::engine::EngineId;
use crate::matcher::eq_ignore_case;
use itertools::Itertools;
use std::cell::Cell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// Operating system process identifier as reported by a debugging host.
pub type ProcessId = u32;

/// Shared reference to a target, history and event router point to the same instance.
pub type TargetRef = Rc<Target>;

/// A process that a debugger was attached to.
///
/// A process id alone is not a stable identity, it becomes stale after the process
/// restarts. Logical identity is a process id together with executable path,
/// owning user and server name.
#[derive(Debug)]
pub struct Target {
    pid: ProcessId,
    path: String,
    user_name: String,
    /// Empty for a local process.
    server_name: String,
    /// Engines process was attached with, empty means default engine selection.
    engines: Vec<EngineId>,
    attached: Cell<bool>,
}

impl Target {
    /// Create new target, not attached and without engine filter.
    ///
    /// # Arguments
    ///
    /// * `pid`: process id at the moment of attaching
    /// * `path`: path to process executable
    /// * `user_name`: process owner, empty if it can't be queried
    /// * `server_name`: remote server friendly name, empty for local processes
    pub fn new(
        pid: ProcessId,
        path: impl Into<String>,
        user_name: impl Into<String>,
        server_name: impl Into<String>,
    ) -> Self {
        Self {
            pid,
            path: path.into(),
            user_name: user_name.into(),
            server_name: server_name.into(),
            engines: vec![],
            attached: Cell::new(false),
        }
    }

    /// Set engine filter, duplicate engine ids are dropped.
    pub fn with_engines(mut self, engines: impl IntoIterator<Item = EngineId>) -> Self {
        self.engines = engines.into_iter().unique().collect();
        self
    }

    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    /// True if process runs on the same machine as a debugger.
    pub fn is_local(&self) -> bool {
        self.server_name.is_empty()
    }

    pub fn engines(&self) -> &[EngineId] {
        &self.engines
    }

    pub fn is_attached(&self) -> bool {
        self.attached.get()
    }

    pub fn set_attached(&self, attached: bool) {
        self.attached.set(attached)
    }

    /// True if both targets describe the same logical process (process id is ignored).
    pub fn same_identity(&self, other: &Target) -> bool {
        eq_ignore_case(&self.path, &other.path)
            && eq_ignore_case(&self.user_name, &other.user_name)
            && self.server_name == other.server_name
    }
}

impl Display for Target {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.path, self.pid)?;
        match (self.user_name.is_empty(), self.is_local()) {
            (true, true) => Ok(()),
            (false, true) => write!(f, " [{}]", self.user_name),
            (true, false) => write!(f, " [@{}]", self.server_name),
            (false, false) => write!(f, " [{}@{}]", self.user_name, self.server_name),
        }
    }
}

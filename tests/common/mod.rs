use anyhow::anyhow;
use reattach::{
    DebugHost, DebugProcess, Engine, EngineId, HostError, ProcessId, ProcessInfo, Reporter,
    ServerInfo, UiNotifier,
};
use std::cell::{Cell, RefCell};
use std::fmt::Arguments;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn engine_id(n: u128) -> EngineId {
    EngineId::from(uuid::Uuid::from_u128(n))
}

#[derive(Default)]
pub struct TestReporter {
    pub warnings: RefCell<Vec<String>>,
    pub errors: RefCell<Vec<String>>,
}

impl Reporter for TestReporter {
    fn report_trace(&self, msg: Arguments<'_>) {
        log::trace!("{msg}");
    }

    fn report_warning(&self, msg: Arguments<'_>) {
        self.warnings.borrow_mut().push(msg.to_string());
    }

    fn report_error(&self, msg: Arguments<'_>) {
        self.errors.borrow_mut().push(msg.to_string());
    }
}

#[derive(Default)]
pub struct TestUi {
    pub updates: Cell<usize>,
}

impl UiNotifier for TestUi {
    fn update(&self) {
        self.updates.set(self.updates.get() + 1);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Attached {
    pub pid: ProcessId,
    pub engines: Option<Vec<String>>,
}

/// Scripted debugging host, process list may be changed between calls.
#[derive(Default)]
pub struct TestHost {
    pub engines: Vec<Engine>,
    pub local: RefCell<Vec<ProcessInfo>>,
    pub remote: RefCell<Vec<ProcessInfo>>,
    pub require_elevation: Cell<bool>,
    pub attached: RefCell<Vec<Attached>>,
}

impl TestHost {
    pub fn spawn(&self, process: ProcessInfo) {
        self.local.borrow_mut().push(process);
    }

    pub fn kill(&self, pid: ProcessId) {
        self.local.borrow_mut().retain(|p| p.pid != pid);
    }

    fn attach_inner(&self, pid: ProcessId, engines: Option<&[String]>) -> Result<(), HostError> {
        if self.require_elevation.get() {
            return Err(HostError::ElevationRequired("access denied".to_string()));
        }
        self.attached.borrow_mut().push(Attached {
            pid,
            engines: engines.map(|e| e.to_vec()),
        });
        Ok(())
    }
}

impl DebugHost for TestHost {
    fn transports(&self) -> anyhow::Result<Vec<String>> {
        Ok(vec!["Default".to_string()])
    }

    fn transport_engines(&self, _: &str) -> anyhow::Result<Vec<Engine>> {
        Ok(self.engines.clone())
    }

    fn local_processes(&self) -> anyhow::Result<Vec<ProcessInfo>> {
        Ok(self.local.borrow().clone())
    }

    fn remote_processes(&self, transport: &str, server: &str) -> anyhow::Result<Vec<ProcessInfo>> {
        if server != "build-box" {
            return Err(anyhow!("{server} unreachable through {transport}"));
        }
        Ok(self.remote.borrow().clone())
    }

    fn attach(&self, process: &ProcessInfo) -> Result<(), HostError> {
        self.attach_inner(process.pid, None)
    }

    fn attach_with_engines(
        &self,
        process: &ProcessInfo,
        engines: &[String],
    ) -> Result<(), HostError> {
        self.attach_inner(process.pid, Some(engines))
    }
}

/// Process handle delivered with debug events.
pub struct TestProcess {
    pub info: ProcessInfo,
    pub server: Option<ServerInfo>,
    pub engines: Option<Vec<EngineId>>,
}

impl TestProcess {
    pub fn local(info: ProcessInfo) -> Self {
        Self {
            info,
            server: None,
            engines: None,
        }
    }
}

impl DebugProcess for TestProcess {
    fn pid(&self) -> ProcessId {
        self.info.pid
    }

    fn name(&self) -> String {
        self.info.name.clone()
    }

    fn file_name(&self) -> anyhow::Result<String> {
        Ok(self.info.path.clone())
    }

    fn server(&self) -> Option<ServerInfo> {
        self.server.clone()
    }

    fn engine_filter(&self) -> Option<Vec<EngineId>> {
        self.engines.clone()
    }
}

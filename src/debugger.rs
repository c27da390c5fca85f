use crate::config::Config;
use crate::engine::EngineCatalog;
use crate::error::Error;
use crate::host::{DebugHost, DebugProcess, Services};
use crate::reattach::ReAttacher;
use crate::router::{DebugEvent, EventRouter};
use crate::session::{DebugMode, SessionState};
use crate::target::{Target, TargetRef};
use std::rc::Rc;

/// Debugging host event callbacks, host calls them synchronously from its single thread.
pub trait DebuggerEvents {
    fn on_debug_event(&self, process: &dyn DebugProcess, event: DebugEvent);

    fn on_mode_change(&self, mode: DebugMode);

    fn on_process_create(&self, process: &dyn DebugProcess) {
        self.on_debug_event(process, DebugEvent::ProcessCreate)
    }

    fn on_process_destroy(&self, process: &dyn DebugProcess) {
        self.on_debug_event(process, DebugEvent::ProcessDestroy)
    }

    fn on_entry_point(&self, process: &dyn DebugProcess) {
        self.on_debug_event(process, DebugEvent::EntryPoint)
    }
}

/// Records processes a debugger attached to and re-attaches to them later.
pub struct ReAttachDebugger {
    services: Services,
    engines: Rc<EngineCatalog>,
    session: SessionState,
    router: EventRouter,
    reattacher: ReAttacher,
}

impl ReAttachDebugger {
    /// Create a debugger. Debugging engines are discovered here, once.
    ///
    /// # Arguments
    ///
    /// * `host`: debugging host
    /// * `services`: host package services
    /// * `config`: re-attach configuration
    pub fn new(host: Rc<dyn DebugHost>, services: Services, config: &Config) -> Self {
        let engines = Rc::new(EngineCatalog::discover(
            host.as_ref(),
            &config.ignored_engines,
            services.reporter.as_ref(),
        ));

        Self {
            router: EventRouter::new(host.clone(), services.clone()),
            reattacher: ReAttacher::new(
                host,
                engines.clone(),
                services.reporter.clone(),
                config.remote_transport.as_str(),
            ),
            session: SessionState::new(),
            engines,
            services,
        }
    }

    /// Attach to a live process matching a recorded target.
    /// See [`ReAttacher::reattach`].
    pub fn reattach(&self, target: Option<&Target>) -> Result<bool, Error> {
        self.reattacher.reattach(target)
    }

    /// Return target for a live process, see [`EventRouter::resolve_target`].
    pub fn resolve_target(&self, process: &dyn DebugProcess) -> Result<TargetRef, Error> {
        self.router.resolve_target(process)
    }

    pub fn engines(&self) -> &EngineCatalog {
        &self.engines
    }

    pub fn is_recording(&self) -> bool {
        self.session.is_recording()
    }
}

impl DebuggerEvents for ReAttachDebugger {
    fn on_debug_event(&self, process: &dyn DebugProcess, event: DebugEvent) {
        self.router.route(&self.session, process, event);
    }

    fn on_mode_change(&self, mode: DebugMode) {
        self.session.on_mode_change(mode, self.services.history.as_ref());
    }
}

use crate::error::Error;
use crate::host::{DebugHost, DebugProcess, Services};
use crate::session::SessionState;
use crate::target::{Target, TargetRef};
use crate::{muted_error, ra_debug, ra_trace};
use std::rc::Rc;
use strum_macros::{Display, IntoStaticStr};

/// Debug event kinds delivered by a host.
#[derive(Copy, Clone, PartialEq, Debug, Display, IntoStaticStr)]
pub enum DebugEvent {
    ProcessCreate,
    ProcessDestroy,
    ProgramCreate,
    ProgramDestroy,
    ThreadCreate,
    ThreadDestroy,
    ModuleLoad,
    EntryPoint,
    Breakpoint,
    Exception,
    Output,
}

impl DebugEvent {
    /// True if event changes target attachment status.
    pub fn is_lifecycle(self) -> bool {
        matches!(
            self,
            DebugEvent::ProcessCreate | DebugEvent::ProcessDestroy | DebugEvent::EntryPoint
        )
    }
}

/// Turns process lifecycle events into target history records.
pub struct EventRouter {
    host: Rc<dyn DebugHost>,
    services: Services,
}

impl EventRouter {
    pub fn new(host: Rc<dyn DebugHost>, services: Services) -> Self {
        Self { host, services }
    }

    /// Handle debug event. Return a target which status was changed.
    ///
    /// # Arguments
    ///
    /// * `session`: current debug session state, events are ignored if session is not recording
    /// * `process`: process event belongs to
    /// * `event`: event kind
    pub fn route(
        &self,
        session: &SessionState,
        process: &dyn DebugProcess,
        event: DebugEvent,
    ) -> Option<TargetRef> {
        if !session.is_recording() || !event.is_lifecycle() {
            return None;
        }

        let target = match self.resolve_target(process) {
            Ok(target) => target,
            Err(e) => {
                self.services.reporter.report_warning(format_args!(
                    "Can't find target from process {} ({}). Event: {event}.",
                    process.name(),
                    process.pid(),
                ));
                ra_debug!("{e}");
                return None;
            }
        };

        match event {
            DebugEvent::ProcessDestroy => {
                target.set_attached(false);
            }
            _ => {
                target.set_attached(true);
                self.services.history.add_first(target.clone());
            }
        }
        self.services.ui.update();

        ra_trace!("{event}: {target}");
        Some(target)
    }

    /// Return target for a process. Target already known by history is returned as is,
    /// otherwise new target is built from process information. New target is not added
    /// into history.
    pub fn resolve_target(&self, process: &dyn DebugProcess) -> Result<TargetRef, Error> {
        let pid = process.pid();
        if let Some(target) = self.services.history.find(pid) {
            return Ok(target);
        }

        let server_name = process
            .server()
            .filter(|server| !server.is_local)
            .map(|server| server.friendly_name)
            .unwrap_or_default();

        let path = process.file_name().map_err(|source| Error::Resolve {
            pid,
            name: process.name(),
            source,
        })?;

        // owner can't be queried through unauthenticated remote transports
        let user_name = if server_name.is_empty() {
            muted_error!(self.host.local_processes(), "local processes:")
                .and_then(|processes| processes.into_iter().find(|p| p.pid == pid))
                .map(|p| p.user_name)
                .unwrap_or_default()
        } else {
            String::new()
        };

        let engines = process.engine_filter().unwrap_or_default();

        Ok(Rc::new(
            Target::new(pid, path, user_name, server_name).with_engines(engines),
        ))
    }
}

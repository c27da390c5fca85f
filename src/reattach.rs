use crate::engine::EngineCatalog;
use crate::error::{Error, HostError};
use crate::host::{DebugHost, ProcessInfo, Reporter};
use crate::matcher::{local_candidates, remote_candidates, select_candidate};
use crate::ra_debug;
use crate::target::Target;
use itertools::Itertools;
use std::rc::Rc;

/// Finds a live process for a recorded target and attaches a debugger to it.
pub struct ReAttacher {
    host: Rc<dyn DebugHost>,
    engines: Rc<EngineCatalog>,
    reporter: Rc<dyn Reporter>,
    remote_transport: String,
}

impl ReAttacher {
    /// Create new re-attacher.
    ///
    /// # Arguments
    ///
    /// * `host`: debugging host
    /// * `engines`: engine catalog, used for resolving target engines into names
    /// * `reporter`: reporting sink
    /// * `remote_transport`: transport name for enumerating processes of remote targets
    pub fn new(
        host: Rc<dyn DebugHost>,
        engines: Rc<EngineCatalog>,
        reporter: Rc<dyn Reporter>,
        remote_transport: impl Into<String>,
    ) -> Self {
        Self {
            host,
            engines,
            reporter,
            remote_transport: remote_transport.into(),
        }
    }

    /// Attach to a process that matches a target.
    ///
    /// Return `Ok(true)` if debugger attached, `Ok(false)` if there is no target, no
    /// matching process or attach failed. An [`Error::ElevationRequired`] is returned
    /// when host needs elevated privileges for attaching, caller should prompt a user
    /// for them.
    pub fn reattach(&self, target: Option<&Target>) -> Result<bool, Error> {
        let Some(target) = target else {
            return Ok(false);
        };

        let candidates = match self.candidates(target) {
            Ok(candidates) => candidates,
            Err(e) => {
                self.reporter.report_error(format_args!(
                    "Unable to enumerate processes for target {target}. Message: {e:#}."
                ));
                return Ok(false);
            }
        };

        let Some(process) = select_candidate(&candidates, target.pid()) else {
            ra_debug!("no process matches target {target}");
            return Ok(false);
        };

        let result = if target.engines().is_empty() {
            self.host.attach(process)
        } else {
            let engines = self.engines.names(target.engines());
            ra_debug!(
                "attach to {} with engines: {}",
                process.pid,
                engines.iter().join(", ")
            );
            self.host.attach_with_engines(process, &engines)
        };

        match result {
            Ok(()) => Ok(true),
            Err(e) => {
                self.reporter.report_error(format_args!(
                    "Unable to ReAttach to process {} ({}) based on target {target}. Message: {e}.",
                    process.name, process.pid
                ));
                match e {
                    HostError::ElevationRequired(_) => Err(Error::ElevationRequired {
                        process: format!("{} ({})", process.name, process.pid),
                        target: target.to_string(),
                    }),
                    HostError::Other(_) => Ok(false),
                }
            }
        }
    }

    fn candidates(&self, target: &Target) -> anyhow::Result<Vec<ProcessInfo>> {
        if target.is_local() {
            let processes = self.host.local_processes()?;
            Ok(local_candidates(processes, target))
        } else {
            let processes = self
                .host
                .remote_processes(&self.remote_transport, target.server_name())?;
            Ok(remote_candidates(processes, target))
        }
    }
}

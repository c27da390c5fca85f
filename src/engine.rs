//! Debugging engines catalog.
//! Host exposes debugging engines (native, managed, script, etc.) through its transports.
//! Catalog is built once at startup and read-only after that.

use crate::host::{DebugHost, Reporter};
use crate::ra_debug;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable 128-bit debugging engine identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct EngineId(Uuid);

impl From<Uuid> for EngineId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for EngineId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Display for EngineId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Debugging engine exposed by a host transport.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub id: EngineId,
    pub name: String,
}

impl Engine {
    pub fn new(id: EngineId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Mapping from engine id into human-readable engine name.
#[derive(Debug, Default)]
pub struct EngineCatalog {
    engines: HashMap<EngineId, String>,
}

impl EngineCatalog {
    /// Enumerate engines of all host transports.
    /// Enumeration error is reported but not fatal, catalog keeps engines found before it.
    ///
    /// # Arguments
    ///
    /// * `host`: debugging host
    /// * `ignored`: engines that never go into catalog
    /// * `reporter`: reporting sink
    pub fn discover(host: &dyn DebugHost, ignored: &[EngineId], reporter: &dyn Reporter) -> Self {
        let mut catalog = Self::default();
        if let Err(e) = catalog.collect(host, ignored, reporter) {
            reporter.report_error(format_args!(
                "ReAttach was unable to detect debugging engines: {e:#}."
            ));
        }
        ra_debug!("engine catalog contains {} engines", catalog.len());
        catalog
    }

    fn collect(
        &mut self,
        host: &dyn DebugHost,
        ignored: &[EngineId],
        reporter: &dyn Reporter,
    ) -> anyhow::Result<()> {
        for transport in host.transports()? {
            for engine in host.transport_engines(&transport)? {
                if ignored.contains(&engine.id) || self.engines.contains_key(&engine.id) {
                    continue;
                }
                reporter.report_trace(format_args!(
                    "ReAttach found debugging engine {}.",
                    engine.name
                ));
                self.engines.insert(engine.id, engine.name);
            }
        }
        Ok(())
    }

    /// Return engine name by its id.
    pub fn name(&self, id: &EngineId) -> Option<&str> {
        self.engines.get(id).map(String::as_str)
    }

    /// Resolve ids into engine names, unknown ids are dropped.
    pub fn names<'a>(&self, ids: impl IntoIterator<Item = &'a EngineId>) -> Vec<String> {
        ids.into_iter()
            .filter_map(|id| self.name(id))
            .map(ToOwned::to_owned)
            .collect()
    }

    pub fn contains(&self, id: &EngineId) -> bool {
        self.engines.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

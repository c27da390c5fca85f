use crate::history::History;
use crate::ra_debug;
use std::cell::Cell;
use strum_macros::{Display, IntoStaticStr};

/// Debugging host mode.
#[derive(Copy, Clone, PartialEq, Debug, Display, IntoStaticStr)]
pub enum DebugMode {
    /// Debugee is running.
    #[strum(serialize = "run")]
    Run,
    /// Debugee is stopped (at breakpoint, exception, etc.).
    #[strum(serialize = "break")]
    Break,
    /// No debugee, host is idle.
    #[strum(serialize = "design")]
    Design,
}

/// Debug session state.
/// Debug events are recorded into history only while a debugee is running.
#[derive(Default, Debug)]
pub struct SessionState {
    recording: Cell<bool>,
}

impl SessionState {
    /// Create idle session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_recording(&self) -> bool {
        self.recording.get()
    }

    /// Handle host mode change. Returning into design mode stops recording and saves history.
    ///
    /// # Arguments
    ///
    /// * `mode`: new host mode
    /// * `history`: targets history
    pub fn on_mode_change(&self, mode: DebugMode, history: &dyn History) {
        ra_debug!("debug mode changed to {mode}");
        match mode {
            DebugMode::Run => self.recording.set(true),
            DebugMode::Design => {
                self.recording.set(false);
                history.save();
            }
            DebugMode::Break => {}
        }
    }
}

use crate::config::DEFAULT_HISTORY_SIZE;
use crate::ra_trace;
use crate::target::{ProcessId, TargetRef};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Ordered collection of targets, most recently attached first.
pub trait History {
    /// Return first target with a given process id.
    fn find(&self, pid: ProcessId) -> Option<TargetRef>;

    /// Insert target at the front of history.
    fn add_first(&self, target: TargetRef);

    /// Persist current history contents.
    fn save(&self);
}

/// In-memory history with a fixed capacity.
///
/// Adding a target that is already present (the same instance or the same logical
/// identity) moves it to the front instead of duplicating it.
pub struct TargetHistory {
    items: RefCell<VecDeque<TargetRef>>,
    capacity: usize,
    saves: Cell<usize>,
}

impl Default for TargetHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

impl TargetHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: RefCell::new(VecDeque::with_capacity(capacity)),
            capacity,
            saves: Cell::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Return target at position, 0 is the most recent one.
    pub fn get(&self, idx: usize) -> Option<TargetRef> {
        self.items.borrow().get(idx).cloned()
    }

    /// Return a snapshot of history, most recent first.
    pub fn items(&self) -> Vec<TargetRef> {
        self.items.borrow().iter().cloned().collect()
    }

    /// Number of `save` calls since creation.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl History for TargetHistory {
    fn find(&self, pid: ProcessId) -> Option<TargetRef> {
        self.items.borrow().iter().find(|t| t.pid() == pid).cloned()
    }

    fn add_first(&self, target: TargetRef) {
        let mut items = self.items.borrow_mut();
        items.retain(|t| !Rc::ptr_eq(t, &target) && !t.same_identity(&target));
        items.push_front(target);
        items.truncate(self.capacity);
    }

    fn save(&self) {
        self.saves.set(self.saves.get() + 1);
        ra_trace!("history saved, {} targets", self.items.borrow().len());
    }
}

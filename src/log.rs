//! Crate diagnostics, all records go under the `reattach` log target.

#[macro_export]
macro_rules! ra_trace {
    ($($arg:tt)+) => {
        log::trace!(target: "reattach", $($arg)+)
    };
}

#[macro_export]
macro_rules! ra_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "reattach", $($arg)+)
    };
}

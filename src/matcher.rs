//! Decides whether a live process is the same logical process as a recorded target.
//!
//! Local processes are matched by executable path and owning user. Processes running in
//! exclusive mode hide their owner, for them (and for remote processes, whose owner is
//! never available) only executable path is compared.

use crate::host::ProcessInfo;
use crate::target::{ProcessId, Target};
use std::cmp::Reverse;

/// Case-insensitive string comparison used for paths and user names.
pub(crate) fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Strict local match: executable path and owning user are equal.
pub fn compare_process(candidate: &ProcessInfo, target: &Target) -> bool {
    eq_ignore_case(&candidate.path, target.path())
        && eq_ignore_case(&candidate.user_name, target.user_name())
}

/// Local match for processes running in exclusive mode: executable path is equal.
pub fn compare_exclusive_process(candidate: &ProcessInfo, target: &Target) -> bool {
    eq_ignore_case(&candidate.path, target.path())
}

/// Remote match: executable path is equal.
/// Candidates must be taken from the target server process list.
pub fn compare_remote_process(candidate: &ProcessInfo, target: &Target) -> bool {
    eq_ignore_case(&candidate.path, target.path())
}

/// Return processes matching a local target. Strict comparison goes first, if nothing
/// is found then processes are matched as the ones running in exclusive mode.
pub fn local_candidates(processes: Vec<ProcessInfo>, target: &Target) -> Vec<ProcessInfo> {
    if processes.iter().any(|p| compare_process(p, target)) {
        return processes
            .into_iter()
            .filter(|p| compare_process(p, target))
            .collect();
    }
    processes
        .into_iter()
        .filter(|p| compare_exclusive_process(p, target))
        .collect()
}

/// Return processes matching a remote target.
pub fn remote_candidates(processes: Vec<ProcessInfo>, target: &Target) -> Vec<ProcessInfo> {
    processes
        .into_iter()
        .filter(|p| compare_remote_process(p, target))
        .collect()
}

/// Choose a process to attach among matched candidates.
///
/// A candidate with exactly the target pid wins. Otherwise, the candidate with the highest
/// pid is chosen, assuming that the newest instance of executable is wanted. This is a
/// heuristic, pid reuse or wraparound may break it.
///
/// # Arguments
///
/// * `candidates`: matched processes
/// * `pid`: recorded target pid, 0 if unknown
pub fn select_candidate(candidates: &[ProcessInfo], pid: ProcessId) -> Option<&ProcessInfo> {
    if pid > 0 {
        if let Some(exact) = candidates.iter().find(|p| p.pid == pid) {
            return Some(exact);
        }
    }
    candidates.iter().min_by_key(|p| Reverse(p.pid))
}

mod common;

use crate::common::{
    engine_id, init_logger, Attached, TestHost, TestProcess, TestReporter, TestUi,
};
use reattach::{
    Config, DebugEvent, DebugMode, DebuggerEvents, Engine, ProcessInfo, ReAttachDebugger,
    ServerInfo, Services, TargetHistory,
};
use std::rc::Rc;

struct Env {
    host: Rc<TestHost>,
    history: Rc<TargetHistory>,
    reporter: Rc<TestReporter>,
    ui: Rc<TestUi>,
    debugger: ReAttachDebugger,
}

fn env(host: TestHost, config: Config) -> Env {
    init_logger();
    let host = Rc::new(host);
    let history = Rc::new(TargetHistory::new(config.history_size));
    let reporter = Rc::new(TestReporter::default());
    let ui = Rc::new(TestUi::default());
    let services = Services::new(reporter.clone(), history.clone(), ui.clone());
    let debugger = ReAttachDebugger::new(host.clone(), services, &config);
    Env {
        host,
        history,
        reporter,
        ui,
        debugger,
    }
}

fn server(pid: u32) -> ProcessInfo {
    ProcessInfo::new(pid, "server", "/opt/app/server", "alice")
}

fn engines_host() -> TestHost {
    TestHost {
        engines: vec![
            Engine::new(engine_id(1), "Native"),
            Engine::new(engine_id(2), "Managed"),
            Engine::new(engine_id(3), "Script"),
        ],
        ..Default::default()
    }
}

#[test]
fn test_record_and_reattach_after_restart() {
    let env = env(TestHost::default(), Config::default());
    env.host.spawn(server(100));

    env.debugger.on_mode_change(DebugMode::Run);
    let process = TestProcess::local(server(100));
    env.debugger.on_process_create(&process);
    env.debugger.on_entry_point(&process);

    assert_eq!(env.history.len(), 1);
    let target = env.history.get(0).unwrap();
    assert!(target.is_attached());
    assert_eq!(target.user_name(), "alice");

    env.host.kill(100);
    env.debugger.on_process_destroy(&process);
    assert!(!target.is_attached());
    env.debugger.on_mode_change(DebugMode::Design);
    assert!(!env.debugger.is_recording());
    assert_eq!(env.history.save_count(), 1);
    assert_eq!(env.ui.updates.get(), 3);

    // process restarted with a new pid, noise from other processes
    env.host.spawn(ProcessInfo::new(90, "client", "/opt/app/client", "alice"));
    env.host.spawn(server(180));

    assert!(env.debugger.reattach(Some(&target)).unwrap());
    assert_eq!(
        *env.host.attached.borrow(),
        vec![Attached {
            pid: 180,
            engines: None
        }]
    );
}

#[test]
fn test_events_before_run_are_ignored() {
    let env = env(TestHost::default(), Config::default());
    let process = TestProcess::local(server(100));

    env.debugger.on_process_create(&process);
    env.debugger.on_debug_event(&process, DebugEvent::ThreadCreate);

    assert!(env.history.is_empty());
    assert_eq!(env.ui.updates.get(), 0);
    assert_eq!(env.history.save_count(), 0);
}

#[test]
fn test_reattach_with_engine_filter() {
    let mut config = Config::default();
    config.ignored_engines = vec![engine_id(3)];
    let env = env(engines_host(), config);
    assert_eq!(env.debugger.engines().len(), 2);

    env.host.spawn(server(100));
    env.debugger.on_mode_change(DebugMode::Run);
    let process = TestProcess {
        engines: Some(vec![engine_id(2), engine_id(3)]),
        ..TestProcess::local(server(100))
    };
    env.debugger.on_process_create(&process);
    env.debugger.on_mode_change(DebugMode::Design);

    let target = env.history.get(0).unwrap();
    assert!(env.debugger.reattach(Some(&target)).unwrap());
    assert_eq!(
        *env.host.attached.borrow(),
        vec![Attached {
            pid: 100,
            engines: Some(vec!["Managed".to_string()])
        }]
    );
}

#[test]
fn test_reattach_remote_target() {
    let env = env(TestHost::default(), Config::default());
    env.debugger.on_mode_change(DebugMode::Run);
    let process = TestProcess {
        server: Some(ServerInfo {
            friendly_name: "build-box".to_string(),
            is_local: false,
        }),
        ..TestProcess::local(ProcessInfo::new(7, "worker", "/srv/worker", ""))
    };
    env.debugger.on_process_create(&process);
    env.debugger.on_mode_change(DebugMode::Design);

    let target = env.history.get(0).unwrap();
    assert!(!target.is_local());

    env.host
        .remote
        .borrow_mut()
        .push(ProcessInfo::new(12, "worker", "/srv/worker", ""));
    assert!(env.debugger.reattach(Some(&target)).unwrap());
    assert_eq!(env.host.attached.borrow()[0].pid, 12);
}

#[test]
fn test_reattach_without_candidates() {
    let env = env(TestHost::default(), Config::default());
    env.host.spawn(server(100));
    env.debugger.on_mode_change(DebugMode::Run);
    env.debugger.on_process_create(&TestProcess::local(server(100)));
    env.debugger.on_mode_change(DebugMode::Design);
    env.host.kill(100);

    let target = env.history.get(0).unwrap();
    assert!(!env.debugger.reattach(Some(&target)).unwrap());
    assert!(env.host.attached.borrow().is_empty());
    assert!(env.reporter.errors.borrow().is_empty());
}

#[test]
fn test_reattach_requires_elevation() {
    let env = env(TestHost::default(), Config::default());
    env.host.spawn(server(100));
    env.debugger.on_mode_change(DebugMode::Run);
    env.debugger.on_process_create(&TestProcess::local(server(100)));
    env.debugger.on_mode_change(DebugMode::Design);

    env.host.require_elevation.set(true);
    let target = env.history.get(0).unwrap();
    let err = env.debugger.reattach(Some(&target)).unwrap_err();
    assert!(err.is_elevation_required());
    assert_eq!(env.reporter.errors.borrow().len(), 1);
}

#[test]
fn test_history_keeps_most_recent_first() {
    let mut config = Config::default();
    config.history_size = 2;
    let env = env(TestHost::default(), config);
    env.debugger.on_mode_change(DebugMode::Run);

    for (pid, path) in [(1, "/bin/a"), (2, "/bin/b"), (3, "/bin/c")] {
        env.debugger
            .on_process_create(&TestProcess::local(ProcessInfo::new(pid, "p", path, "")));
    }

    let paths: Vec<_> = env
        .history
        .items()
        .iter()
        .map(|t| t.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/bin/c", "/bin/b"]);
    assert!(env.reporter.warnings.borrow().is_empty());
}

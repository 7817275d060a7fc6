use std::io;
use std::sync::{Arc, Mutex};

use super::*;

#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().expect("log buffer").clone()).expect("utf8 log")
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture(f: impl FnOnce()) -> String {
    let log = CapturedLog::default();
    let writer = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    log.contents()
}

#[test]
fn log_notifier_writes_success_at_info_and_errors_at_warn() {
    let output = capture(|| {
        LogNotifier.notify(Notification::success("Customer added successfully!"));
        LogNotifier.notify(Notification::error("Error deleting customer: boom"));
    });

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2, "unexpected log output: {output}");
    assert!(lines[0].contains("INFO"));
    assert!(lines[0].contains("Customer added successfully!"));
    assert!(lines[0].contains("severity="));
    assert!(lines[1].contains("WARN"));
    assert!(lines[1].contains("Error deleting customer: boom"));
}

#[test]
fn shared_notifier_forwards_to_inner() {
    let broadcast = BroadcastNotifier::new(4);
    let mut rx = broadcast.subscribe();
    let shared = Arc::new(broadcast);

    shared.notify(Notification::error("list unavailable"));

    let received = rx.try_recv().expect("notification");
    assert_eq!(received.severity, Severity::Error);
    assert_eq!(received.message, "list unavailable");
}

#[test]
fn broadcast_without_subscribers_is_not_an_error() {
    BroadcastNotifier::default().notify(Notification::success("nobody listening"));
}

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tokio::sync::oneshot;
use vrcast_protocol::CommandOutcome;

use super::*;
use crate::command::transport::FakeQuitTransport;
use crate::notify::ChannelSink;

fn executor_with_channel(transport: Arc<FakeQuitTransport>) -> (RemoteCommandExecutor, tokio::sync::mpsc::UnboundedReceiver<CommandOutcome>) {
	let (sink, receiver) = ChannelSink::new();
	let executor = RemoteCommandExecutor::new(transport, Arc::new(sink));
	(executor, receiver)
}

fn app() -> AppIdentity {
	AppIdentity::new(7, "Helios")
}

fn credentials() -> Credentials {
	Credentials::new("paired-device-1")
}

/// Issues a quit and waits for its completion hook, counting invocations.
async fn quit_and_wait(executor: &RemoteCommandExecutor, host: &str) -> usize {
	let hook_calls = Arc::new(AtomicUsize::new(0));
	let (done_tx, done_rx) = oneshot::channel();
	let counted = Arc::clone(&hook_calls);
	executor
		.quit_application(host, app(), credentials(), move || {
			counted.fetch_add(1, Ordering::SeqCst);
			let _ = done_tx.send(());
		})
		.unwrap();
	done_rx.await.unwrap();
	hook_calls.load(Ordering::SeqCst)
}

#[tokio::test]
async fn success_is_notified_and_hook_runs_once() {
	let transport = Arc::new(FakeQuitTransport::new());
	transport.push_result(true);
	let (executor, mut outcomes) = executor_with_channel(Arc::clone(&transport));

	let hook_calls = quit_and_wait(&executor, "10.0.0.2").await;

	assert_eq!(hook_calls, 1);
	assert_eq!(outcomes.recv().await, Some(CommandOutcome::Success));
	let calls = transport.calls();
	assert_eq!(calls.len(), 1);
	assert_eq!(calls[0].host, "10.0.0.2");
	assert_eq!(calls[0].app_id, 7);
	assert_eq!(calls[0].unique_id, "paired-device-1");
}

#[tokio::test]
async fn connect_refused_resolves_to_host_unreachable() {
	let transport = Arc::new(FakeQuitTransport::new());
	transport.push_failure(TransportFailure::ConnectFailed("connection refused".to_string()));
	let (executor, mut outcomes) = executor_with_channel(Arc::clone(&transport));

	let hook_calls = quit_and_wait(&executor, "hostB").await;

	assert_eq!(hook_calls, 1);
	assert_eq!(
		outcomes.recv().await,
		Some(CommandOutcome::HostUnreachable {
			message: "connection refused".to_string(),
		})
	);
}

#[tokio::test]
async fn declined_command_resolves_to_protocol_error_zero() {
	let transport = Arc::new(FakeQuitTransport::new());
	transport.push_result(false);
	let (executor, mut outcomes) = executor_with_channel(Arc::clone(&transport));

	quit_and_wait(&executor, "10.0.0.2").await;

	assert_eq!(
		outcomes.recv().await,
		Some(CommandOutcome::ProtocolError {
			code: 0,
			message: "command declined".to_string(),
		})
	);
}

#[tokio::test]
async fn crashed_exchange_still_runs_hook_and_notifies_transport_error() {
	let transport = Arc::new(FakeQuitTransport::new());
	transport.push_panic("quit exchange blew up");
	let (executor, mut outcomes) = executor_with_channel(Arc::clone(&transport));

	let hook_calls = quit_and_wait(&executor, "10.0.0.2").await;

	assert_eq!(hook_calls, 1);
	let outcome = outcomes.recv().await.unwrap();
	let CommandOutcome::TransportError { message } = outcome else {
		panic!("expected TransportError, got {outcome:?}");
	};
	assert!(message.contains("command execution failed"), "unexpected message: {message}");
}

#[tokio::test]
async fn empty_host_is_rejected_synchronously() {
	let transport = Arc::new(FakeQuitTransport::new());
	let (executor, _outcomes) = executor_with_channel(Arc::clone(&transport));

	let err = executor.quit_application("  ", app(), credentials(), || {}).unwrap_err();

	assert!(matches!(err, CommandError::EmptyHost));
	assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn hook_runs_before_outcome_notification() {
	struct RecordingSink {
		events: Arc<Mutex<Vec<&'static str>>>,
	}

	impl NotificationSink for RecordingSink {
		fn notify(&self, _outcome: CommandOutcome) {
			self.events.lock().push("notify");
		}
	}

	let transport = Arc::new(FakeQuitTransport::new());
	transport.push_result(true);
	let events = Arc::new(Mutex::new(Vec::new()));
	let executor = RemoteCommandExecutor::new(
		Arc::clone(&transport) as Arc<dyn QuitTransport>,
		Arc::new(RecordingSink { events: Arc::clone(&events) }),
	);

	let (done_tx, done_rx) = oneshot::channel();
	let hook_events = Arc::clone(&events);
	executor
		.quit_application("10.0.0.2", app(), credentials(), move || {
			hook_events.lock().push("hook");
			let _ = done_tx.send(());
		})
		.unwrap();
	done_rx.await.unwrap();

	// The notification lands after the hook released done_tx; poll until
	// the spawned task finishes its final step.
	for _ in 0..100 {
		if events.lock().len() == 2 {
			break;
		}
		tokio::time::sleep(std::time::Duration::from_millis(1)).await;
	}
	assert_eq!(*events.lock(), vec!["hook", "notify"]);
}

#[tokio::test]
async fn late_resolution_after_receiver_dropped_is_not_a_fault() {
	let transport = Arc::new(FakeQuitTransport::new());
	transport.push_result(true);
	let (executor, outcomes) = executor_with_channel(Arc::clone(&transport));
	drop(outcomes);

	let hook_calls = quit_and_wait(&executor, "10.0.0.2").await;

	assert_eq!(hook_calls, 1);
}

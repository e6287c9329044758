use sinklog::{message_format, sinks::FileSink, Dispatcher, Severity};
use std::{
    collections::HashSet,
    sync::Arc,
    thread::{self, JoinHandle},
};

const NO_OF_THREADS: usize = 5;
const NO_OF_LOGLINES_PER_THREAD: usize = 2_000;

// cargo test multi_threaded -- --nocapture
#[test]
fn multi_threaded() {
    let dir = temp_dir::TempDir::new().unwrap();
    let path = dir.child("multi_threaded.log");
    let dispatcher = Arc::new(
        Dispatcher::new().with_sink(
            FileSink::builder(Severity::None, &path)
                .format(message_format)
                .build(),
        ),
    );

    let worker_handles = start_worker_threads(&dispatcher, NO_OF_THREADS);
    wait_for_workers_to_close(worker_handles);
    dispatcher.shutdown();

    verify_logs(&std::fs::read_to_string(&path).unwrap());
}

// Starts given number of worker threads and lets each execute `do_work`
fn start_worker_threads(dispatcher: &Arc<Dispatcher>, no_of_workers: usize) -> Vec<JoinHandle<()>> {
    (0..no_of_workers)
        .map(|thread_number| {
            let dispatcher = Arc::clone(dispatcher);
            thread::Builder::new()
                .name(thread_number.to_string())
                .spawn(move || do_work(&dispatcher, thread_number))
                .unwrap()
        })
        .collect()
}

fn do_work(dispatcher: &Dispatcher, thread_number: usize) {
    for idx in 0..NO_OF_LOGLINES_PER_THREAD {
        dispatcher
            .message(Severity::Info)
            .append("XXXXX thread ")
            .append(thread_number)
            .append(" line ")
            .append(idx)
            .append(" YYYYY");
    }
}

fn wait_for_workers_to_close(worker_handles: Vec<JoinHandle<()>>) {
    for worker_handle in worker_handles {
        worker_handle
            .join()
            .unwrap_or_else(|e| panic!("Joining worker thread failed: {e:?}"));
    }
}

// every line must be complete, and every line must appear exactly once
fn verify_logs(content: &str) {
    let mut seen = HashSet::new();
    for line in content.lines() {
        assert!(
            line.starts_with("XXXXX thread ") && line.ends_with(" YYYYY"),
            "interleaved line: {line}"
        );
        assert!(seen.insert(line.to_string()), "duplicate line: {line}");
    }
    assert_eq!(seen.len(), NO_OF_THREADS * NO_OF_LOGLINES_PER_THREAD);
}

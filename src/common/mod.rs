use crossbeam_channel::{Receiver, Sender};
use std::thread;
use std::thread::JoinHandle;

/// Handle of a worker thread: the join handle plus the channel used to ask the
/// worker to leave its loop.
#[derive(Debug)]
pub struct RaftWorker {
    pub join_handle: JoinHandle<()>,
    pub terminate_worker_tx: Sender<()>,
}

impl RaftWorker {
    /// Sends the termination signal and waits for the worker thread to exit.
    pub fn terminate(self) {
        let send_result = self.terminate_worker_tx.send(());
        if send_result.is_err() {
            trace!("Worker already finished, termination signal is not required");
        }

        let join_result = self.join_handle.join();
        if join_result.is_err() {
            error!("Worker returned an error")
        }
    }
}

pub fn run_worker<T, F>(worker: F, params: T) -> RaftWorker
where
    T: Send + 'static,
    F: Fn(T, Receiver<()>) + Send + 'static,
{
    let (terminate_worker_tx, terminate_worker_rx): (Sender<()>, Receiver<()>) =
        crossbeam_channel::unbounded();

    let join_handle = thread::spawn(move || worker(params, terminate_worker_rx));

    RaftWorker {
        join_handle,
        terminate_worker_tx,
    }
}

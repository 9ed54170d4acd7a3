//! Bounded background work queue.
//!
//! Used only by external collaborators (file downloads, checksums).  The
//! controller tick never submits work here.  The queue is bounded; a full
//! queue drops the submission with a warning rather than blocking the
//! submitting thread.

use std::sync::mpsc::{SyncSender, TrySendError, sync_channel};
use std::thread::JoinHandle;

type Job = Box<dyn FnOnce() + Send + 'static>;

pub struct WorkQueue {
    sender: Option<SyncSender<Job>>,
    worker: Option<JoinHandle<()>>,
}

impl WorkQueue {
    /// Spawn the worker thread with room for `capacity` queued jobs.
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = sync_channel::<Job>(capacity);

        let worker = std::thread::Builder::new()
            .name("drift-work".into())
            .spawn(move || {
                while let Ok(job) = receiver.recv() {
                    job();
                }
            })
            .expect("failed to spawn work thread");

        Self { sender: Some(sender), worker: Some(worker) }
    }

    /// Queue `job` for the worker thread.  Returns `false` (and logs) when
    /// the queue is at capacity.
    pub fn submit<F: FnOnce() + Send + 'static>(&self, job: F) -> bool {
        let sender = self.sender.as_ref().expect("work queue already shut down");
        match sender.try_send(Box::new(job)) {
            Ok(()) => true,
            Err(TrySendError::Full(_)) => {
                log::warn!("work queue full; dropping submission");
                false
            }
            Err(TrySendError::Disconnected(_)) => {
                log::warn!("work queue worker gone; dropping submission");
                false
            }
        }
    }
}

impl Drop for WorkQueue {
    fn drop(&mut self) {
        // Closing the channel lets the worker drain remaining jobs and exit.
        drop(self.sender.take());
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

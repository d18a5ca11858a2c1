//! The "post to the UI thread" primitive.
//!
//! Ingress loops never touch the sample buffer or the toolkit; they
//! enqueue requests here and the UI loop drains the queue each frame.
//! The channel is bounded so a runaway producer backs up in its own
//! transport instead of exhausting memory.

use std::sync::mpsc::{self, Receiver, SyncSender};

/// Queued requests drained below the frame rate; past this the sender
/// blocks rather than grow the backlog.
const MAX_QUEUED_REQUESTS: usize = 1024;

#[derive(Debug, Clone)]
pub enum UiRequest {
    /// Merge one batch of samples and redraw.
    Append(Vec<f64>),
    /// Raise the window without touching the buffer.
    Focus,
}

pub type UiSender = SyncSender<UiRequest>;
pub type UiReceiver = Receiver<UiRequest>;

pub fn ui_channel() -> (UiSender, UiReceiver) {
    mpsc::sync_channel(MAX_QUEUED_REQUESTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requests_drain_in_order() {
        let (tx, rx) = ui_channel();
        tx.send(UiRequest::Focus).unwrap();
        tx.send(UiRequest::Append(vec![1.0])).unwrap();
        tx.send(UiRequest::Append(vec![2.0])).unwrap();
        drop(tx);

        let drained: Vec<UiRequest> = rx.try_iter().collect();
        assert!(matches!(drained[0], UiRequest::Focus));
        assert!(matches!(&drained[1], UiRequest::Append(batch) if batch == &[1.0]));
        assert!(matches!(&drained[2], UiRequest::Append(batch) if batch == &[2.0]));
    }

    #[test]
    fn drained_queue_reports_empty() {
        let (tx, rx) = ui_channel();
        tx.send(UiRequest::Focus).unwrap();
        let _ = rx.try_iter().count();
        assert!(rx.try_recv().is_err());
    }
}

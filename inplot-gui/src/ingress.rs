//! The two ingress loops feeding the plot window.
//!
//! Loop A consumes parent commands from the direct channel (stdin);
//! loop B consumes topic-filtered sample batches from the broadcast
//! subscriber. Neither loop mutates display state itself; both enqueue
//! [`UiRequest`]s for the UI thread.

use crate::ui_queue::{UiRequest, UiSender};
use inplot_transport::broadcast::Subscriber;
use inplot_transport::direct::LineReceiver;
use inplot_transport::ParentMessage;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// Yield briefly after handling a batch so the UI thread gets a slice
/// even under a firehose of messages.
const INGRESS_YIELD: Duration = Duration::from_millis(1);

/// Handles to the two ingress threads, owned by the window lifecycle.
pub struct IngressLoops {
    stop: Arc<AtomicBool>,
    handles: Vec<JoinHandle<()>>,
}

impl IngressLoops {
    pub fn start<R>(direct: R, subscriber: Subscriber, ui_tx: UiSender) -> Self
    where
        R: Read + Send + 'static,
    {
        let stop = Arc::new(AtomicBool::new(false));
        let handles = vec![
            spawn_direct_loop(direct, ui_tx.clone(), Arc::clone(&stop)),
            spawn_broadcast_loop(subscriber, ui_tx, Arc::clone(&stop)),
        ];
        Self { stop, handles }
    }

    /// Signal both loops to stop and reap any that already finished.
    ///
    /// A loop parked in a blocking receive stays parked; the process is
    /// about to exit anyway, so those are abandoned rather than joined.
    pub fn shutdown(self) {
        self.stop.store(true, Ordering::Relaxed);
        for handle in self.handles {
            if handle.is_finished() {
                let _ = handle.join();
            }
        }
    }
}

fn spawn_direct_loop<R>(direct: R, ui_tx: UiSender, stop: Arc<AtomicBool>) -> JoinHandle<()>
where
    R: Read + Send + 'static,
{
    thread::spawn(move || {
        let mut receiver = LineReceiver::<R, ParentMessage>::new(direct);
        while !stop.load(Ordering::Relaxed) {
            match receiver.recv() {
                Ok(Some(ParentMessage::Focus)) => {
                    if ui_tx.send(UiRequest::Focus).is_err() {
                        break;
                    }
                }
                Ok(Some(ParentMessage::Data { samples })) => {
                    log::debug!("direct channel delivered {} samples", samples.len());
                    if ui_tx.send(UiRequest::Append(samples)).is_err() {
                        break;
                    }
                    thread::sleep(INGRESS_YIELD);
                }
                Ok(None) => {
                    log::info!("direct channel closed by parent");
                    break;
                }
                Err(err) => {
                    log::error!("direct channel receive failed: {err}");
                    break;
                }
            }
        }
    })
}

fn spawn_broadcast_loop(
    mut subscriber: Subscriber,
    ui_tx: UiSender,
    stop: Arc<AtomicBool>,
) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match subscriber.recv() {
                Ok(samples) => {
                    log::debug!("broadcast channel delivered {} samples", samples.len());
                    if ui_tx.send(UiRequest::Append(samples)).is_err() {
                        break;
                    }
                    thread::sleep(INGRESS_YIELD);
                }
                Err(err) => {
                    log::error!("broadcast channel receive failed: {err}");
                    break;
                }
            }
        }
    })
}

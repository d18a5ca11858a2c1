//! Synthetic feed for manual testing.
//!
//! Binds a demo broker, spawns a plot window against it, and pushes
//! sine batches alternately over the direct channel and the broadcast
//! socket, so both ingress paths get exercised.

use crate::handle::{PlotWindowHandle, SpawnOptions};
use inplot_core::WindowIdentity;
use inplot_transport::broadcast::Publisher;
use std::time::Duration;

const BATCH_LEN: usize = 100;
const PHASE_STEP: f64 = 0.05;

pub fn run(port: u16, interval_ms: u64) -> Result<(), Box<dyn std::error::Error>> {
    let mut publisher = Publisher::bind(port)?;
    let port = publisher.local_port()?;
    let identity = WindowIdentity::new("test_conn", "test_hw", "test_dev");
    let topic = identity.topic();

    let mut window = PlotWindowHandle::spawn(
        &identity,
        &SpawnOptions {
            config: None,
            broker_port: Some(port),
        },
    )?;
    log::info!("demo broker on port {port}; feeding every {interval_ms} ms");

    let mut phase = 0.0f64;
    let mut over_socket = false;
    loop {
        let batch: Vec<f64> = (0..BATCH_LEN)
            .map(|i| (phase + i as f64 * PHASE_STEP).sin())
            .collect();
        phase += BATCH_LEN as f64 * PHASE_STEP;

        if over_socket {
            publisher.publish(&topic, &batch)?;
        } else if let Err(err) = window.send_data(&batch) {
            // The direct pipe breaking is how we learn the window is gone.
            log::info!("window went away ({err}); stopping feed");
            break;
        }
        over_socket = !over_socket;
        std::thread::sleep(Duration::from_millis(interval_ms));
    }

    window.wait_closed()?;
    Ok(())
}

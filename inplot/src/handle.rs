//! Parent-side spawn-and-handle abstraction for the plot window.
//!
//! The window runs as a child process; the handle owns its stdio pipes
//! and speaks the direct-channel protocol over them.

use inplot_core::WindowIdentity;
use inplot_transport::{ChildMessage, LineReceiver, LineSender, ParentMessage, TransportError};
use std::io;
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

#[derive(Debug, Default, Clone)]
pub struct SpawnOptions {
    /// Lab config file passed through to the child.
    pub config: Option<PathBuf>,
    /// Broker publish port override, bypassing the config lookup.
    pub broker_port: Option<u16>,
}

pub struct PlotWindowHandle {
    child: Child,
    to_child: LineSender<ChildStdin, ParentMessage>,
    from_child: LineReceiver<ChildStdout, ChildMessage>,
}

impl PlotWindowHandle {
    /// Launch this same binary in `run` mode with piped stdio.
    pub fn spawn(identity: &WindowIdentity, options: &SpawnOptions) -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let mut command = Command::new(exe);
        command
            .arg("run")
            .arg("--connection-name")
            .arg(&identity.connection_name)
            .arg("--hardware-name")
            .arg(&identity.hardware_name)
            .arg("--device-name")
            .arg(&identity.device_name)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped());
        if let Some(config) = &options.config {
            command.arg("--config").arg(config);
        }
        if let Some(port) = options.broker_port {
            command.arg("--broker-port").arg(port.to_string());
        }

        let mut child = command.spawn()?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "child stdin not captured"))?;
        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| io::Error::new(io::ErrorKind::BrokenPipe, "child stdout not captured"))?;
        log::info!("spawned plot window process (pid {})", child.id());
        Ok(Self {
            child,
            to_child: LineSender::new(stdin),
            from_child: LineReceiver::new(stdout),
        })
    }

    /// Push one batch of samples over the direct channel.
    pub fn send_data(&mut self, samples: &[f64]) -> Result<(), TransportError> {
        self.to_child.send(&ParentMessage::Data {
            samples: samples.to_vec(),
        })
    }

    /// Ask the window to bring itself to the foreground.
    pub fn focus(&mut self) -> Result<(), TransportError> {
        self.to_child.send(&ParentMessage::Focus)
    }

    /// Block until the window reports closure (or its pipe drops), then
    /// reap the process.
    pub fn wait_closed(&mut self) -> Result<(), TransportError> {
        match self.from_child.recv()? {
            Some(ChildMessage::Closed) => log::debug!("window reported closure"),
            None => log::debug!("window pipe closed without a closure message"),
        }
        let _ = self.child.wait();
        log::info!("plot window process exited");
        Ok(())
    }
}

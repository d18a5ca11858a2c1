//! Broadcast channel: topic-filtered publish/subscribe over TCP.
//!
//! Every message is two length-prefixed frames: the topic bytes, then a
//! flat native-endian f64 payload (see [`crate::codec`]). A subscriber
//! opens its connection by sending a single frame carrying its topic
//! filter; the publisher fans each message out to every subscriber whose
//! filter is a prefix of the message topic.

use crate::codec::{decode_f64s, encode_f64s};
use crate::TransportError;
use std::io::{self, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::time::Duration;

/// Upper bound on a single frame; anything larger is a corrupt stream.
const MAX_FRAME_BYTES: u32 = 64 * 1024 * 1024;

fn write_frame(writer: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    let len = bytes.len() as u32;
    writer.write_all(&len.to_le_bytes())?;
    writer.write_all(bytes)
}

fn read_frame(reader: &mut impl Read) -> Result<Vec<u8>, TransportError> {
    let mut header = [0u8; 4];
    reader.read_exact(&mut header)?;
    let len = u32::from_le_bytes(header);
    if len > MAX_FRAME_BYTES {
        return Err(TransportError::Frame(format!(
            "frame of {len} bytes exceeds the {MAX_FRAME_BYTES} byte limit"
        )));
    }
    let mut frame = vec![0u8; len as usize];
    reader.read_exact(&mut frame)?;
    Ok(frame)
}

/// Subscribing side of the broadcast channel.
pub struct Subscriber {
    stream: TcpStream,
    filter: Vec<u8>,
}

impl Subscriber {
    /// Connect to the broker at `tcp://127.0.0.1:<port>` and subscribe
    /// with the given topic filter.
    pub fn connect(port: u16, filter: &[u8]) -> Result<Self, TransportError> {
        let stream = TcpStream::connect(("127.0.0.1", port))?;
        stream.set_nodelay(true)?;
        let mut subscriber = Self {
            stream,
            filter: filter.to_vec(),
        };
        write_frame(&mut subscriber.stream, filter)?;
        subscriber.stream.flush()?;
        log::info!("subscribed to broker on port {port}");
        Ok(subscriber)
    }

    /// Block until the next sample batch for our topic arrives.
    ///
    /// The topic frame is only consulted for filtering and then dropped;
    /// subscription filtering upstream means mismatches are rare.
    pub fn recv(&mut self) -> Result<Vec<f64>, TransportError> {
        loop {
            let topic = read_frame(&mut self.stream)?;
            let payload = read_frame(&mut self.stream)?;
            if topic.starts_with(&self.filter) {
                return Ok(decode_f64s(&payload));
            }
            log::debug!("dropping message for foreign topic ({} bytes)", payload.len());
        }
    }
}

struct SubscriberEntry {
    stream: TcpStream,
    filter: Vec<u8>,
}

/// Publishing side of the broadcast channel.
///
/// This is the broker role: it owns the listening socket, admits
/// subscribers, and fans out every published batch. Used by the demo
/// feed and by tests; the production broker lives elsewhere in the
/// control system.
pub struct Publisher {
    listener: TcpListener,
    subscribers: Vec<SubscriberEntry>,
}

impl Publisher {
    /// Bind `tcp://127.0.0.1:<port>`; port 0 picks an ephemeral port.
    pub fn bind(port: u16) -> Result<Self, TransportError> {
        let listener = TcpListener::bind(("127.0.0.1", port))?;
        listener.set_nonblocking(true)?;
        Ok(Self {
            listener,
            subscribers: Vec::new(),
        })
    }

    pub fn local_port(&self) -> Result<u16, TransportError> {
        Ok(self.listener.local_addr()?.port())
    }

    /// Admit any subscribers waiting on the listening socket.
    pub fn poll_subscribers(&mut self) -> Result<(), TransportError> {
        loop {
            match self.listener.accept() {
                Ok((stream, addr)) => {
                    stream.set_nodelay(true)?;
                    // The subscribe frame arrives right behind the
                    // connection; bound the wait so a dead peer cannot
                    // wedge the publish loop.
                    stream.set_read_timeout(Some(Duration::from_secs(5)))?;
                    let mut stream = stream;
                    let filter = read_frame(&mut stream)?;
                    log::info!("subscriber {addr} joined with a {} byte filter", filter.len());
                    self.subscribers.push(SubscriberEntry { stream, filter });
                }
                Err(err) if err.kind() == io::ErrorKind::WouldBlock => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Publish one batch under a topic to every matching subscriber.
    ///
    /// Subscribers whose connection has gone away are dropped; there is
    /// no delivery guarantee to late joiners.
    pub fn publish(&mut self, topic: &[u8], samples: &[f64]) -> Result<(), TransportError> {
        self.poll_subscribers()?;
        let payload = encode_f64s(samples);
        self.subscribers.retain_mut(|entry| {
            if !topic.starts_with(entry.filter.as_slice()) {
                return true;
            }
            let sent = write_frame(&mut entry.stream, topic)
                .and_then(|_| write_frame(&mut entry.stream, &payload))
                .and_then(|_| entry.stream.flush());
            if let Err(err) = &sent {
                log::info!("dropping subscriber after send failure: {err}");
            }
            sent.is_ok()
        });
        Ok(())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

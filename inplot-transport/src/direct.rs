//! Direct parent/child channel: newline-delimited JSON over any ordered
//! byte stream, in practice the child process's stdin and stdout pipes.

use crate::TransportError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io::{BufRead, BufReader, Read, Write};
use std::marker::PhantomData;

pub struct LineSender<W: Write, T: Serialize> {
    writer: W,
    _marker: PhantomData<T>,
}

impl<W: Write, T: Serialize> LineSender<W, T> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            _marker: PhantomData,
        }
    }

    pub fn send(&mut self, message: &T) -> Result<(), TransportError> {
        let payload = serde_json::to_string(message)?;
        self.writer.write_all(payload.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        Ok(())
    }
}

pub struct LineReceiver<R: Read, T: DeserializeOwned> {
    reader: BufReader<R>,
    _marker: PhantomData<T>,
}

impl<R: Read, T: DeserializeOwned> LineReceiver<R, T> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            _marker: PhantomData,
        }
    }

    /// Block for the next recognized message. Lines that do not parse as
    /// `T` are silently skipped; `Ok(None)` means the peer closed the
    /// stream.
    pub fn recv(&mut self) -> Result<Option<T>, TransportError> {
        loop {
            let mut line = String::new();
            let read = self.reader.read_line(&mut line)?;
            if read == 0 {
                return Ok(None);
            }
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<T>(line) {
                Ok(message) => return Ok(Some(message)),
                Err(err) => {
                    log::debug!("ignoring unrecognized direct-channel message: {err}");
                }
            }
        }
    }
}

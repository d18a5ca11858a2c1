pub mod broadcast;
pub mod codec;
pub mod direct;
pub mod protocol;

pub use broadcast::{Publisher, Subscriber};
pub use direct::{LineReceiver, LineSender};
pub use protocol::{ChildMessage, ParentMessage};

#[derive(thiserror::Error, Debug)]
pub enum TransportError {
    #[error("transport i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed frame: {0}")]
    Frame(String),
    #[error("protocol error: {0}")]
    Protocol(#[from] serde_json::Error),
    #[error("channel closed by peer")]
    Closed,
}

use serde::{Deserialize, Serialize};

/// Commands a parent process sends down the direct channel.
///
/// The historical wire protocol sent a bare `"data"` command followed by
/// the payload as a second message; here the payload travels inside the
/// tagged command itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ParentMessage {
    /// Bring the plot window to the foreground.
    Focus,
    /// One batch of analog samples to merge into the plot.
    Data { samples: Vec<f64> },
}

/// Messages the plot window sends back to its parent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ChildMessage {
    /// The UI event loop has terminated.
    Closed,
}

pub mod buffer;
pub mod config;
pub mod identity;

pub use buffer::{RollMode, SampleBuffer, MAX_DATA};
pub use config::{ConfigError, LabConfig};
pub use identity::WindowIdentity;

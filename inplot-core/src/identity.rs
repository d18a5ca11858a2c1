/// Names identifying which analog input a plot window belongs to.
///
/// Immutable for the lifetime of the window; only used to derive the
/// window title and the broadcast subscription topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowIdentity {
    pub connection_name: String,
    pub hardware_name: String,
    pub device_name: String,
}

impl WindowIdentity {
    pub fn new(
        connection_name: impl Into<String>,
        hardware_name: impl Into<String>,
        device_name: impl Into<String>,
    ) -> Self {
        Self {
            connection_name: connection_name.into(),
            hardware_name: hardware_name.into(),
            device_name: device_name.into(),
        }
    }

    /// Window title; a connection name of `"-"` means "no connection
    /// label" and is suppressed.
    pub fn title(&self) -> String {
        if self.connection_name != "-" {
            format!("{} ({})", self.hardware_name, self.connection_name)
        } else {
            self.hardware_name.clone()
        }
    }

    /// Subscription topic: `"<device> <hardware>"` UTF-8 encoded with a
    /// trailing NUL so `"dev 1"` never matches a `"dev 10"` publisher.
    pub fn topic(&self) -> Vec<u8> {
        let mut topic = format!("{} {}", self.device_name, self.hardware_name).into_bytes();
        topic.push(0);
        topic
    }
}

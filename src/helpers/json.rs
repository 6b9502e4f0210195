use serde_derive::Serialize;

// Lookup failures are reported as a normal payload, not as an HTTP error.
#[derive(Serialize, Debug)]
pub(crate) struct JsonMessage {
    pub(crate) message: String,
}

impl JsonMessage {
    pub(crate) fn new(message: &str) -> Self {
        JsonMessage {
            message: message.to_string(),
        }
    }
}

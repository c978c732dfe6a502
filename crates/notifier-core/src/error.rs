//! Notifier Error Types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Payload is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Missing required attribute: {key}")]
    MissingAttribute { key: String },

    #[error("Delivery error: {message}")]
    Delivery { status: Option<u16>, message: String },
}

impl NotifierError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration { message: message.into() }
    }

    pub fn missing_attribute(key: impl Into<String>) -> Self {
        Self::MissingAttribute { key: key.into() }
    }

    pub fn delivery(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Delivery { status, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, NotifierError>;

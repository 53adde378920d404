//! Response body representations

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Representation the caller wants the response body in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Body decoded with the response charset, UTF-8 by default
    #[default]
    Text,
    /// Body as received
    Binary,
}

/// A response body in the format that was requested.
///
/// No JSON decoding happens here; callers parse the payload themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    /// Decoded text, returned for [`ResponseFormat::Text`]
    Text(String),
    /// Raw bytes, returned for [`ResponseFormat::Binary`]
    Binary(Bytes),
}

impl ResponseBody {
    /// The format this body was produced for.
    pub fn format(&self) -> ResponseFormat {
        match self {
            ResponseBody::Text(_) => ResponseFormat::Text,
            ResponseBody::Binary(_) => ResponseFormat::Binary,
        }
    }

    /// Borrow the text, if this is a text body.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ResponseBody::Text(text) => Some(text.as_str()),
            ResponseBody::Binary(_) => None,
        }
    }

    /// The underlying bytes of either variant.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            ResponseBody::Text(text) => text.as_bytes(),
            ResponseBody::Binary(bytes) => &bytes[..],
        }
    }

    /// Consume into a string, decoding binary bodies lossily.
    pub fn into_text(self) -> String {
        match self {
            ResponseBody::Text(text) => text,
            ResponseBody::Binary(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    /// Consume into bytes.
    pub fn into_bytes(self) -> Bytes {
        match self {
            ResponseBody::Text(text) => Bytes::from(text),
            ResponseBody::Binary(bytes) => bytes,
        }
    }
}

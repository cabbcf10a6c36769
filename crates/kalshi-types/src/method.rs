//! HTTP methods accepted by the trade API

use std::fmt;

/// HTTP method of an outbound request
///
/// The upper-case name is part of the signed canonical message, so only
/// the methods the trade API actually uses are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Read-only requests
    Get,
    /// Order creation, decrease, logout
    Post,
    /// Order cancellation
    Delete,
}

impl Method {
    /// Returns the upper-case method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Transport layer for the MCP server.
//!
//! The server communicates over standard input/output, the default MCP mode.
//! The transport handles the connection lifecycle and delegates message
//! processing to the MCP server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;

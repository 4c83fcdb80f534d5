//! MCP Tools
//!
//! Tool implementations behind the MCP server.

pub mod calculator;
pub mod records;
pub mod status;
